// Utils compartidos

pub mod format;
pub mod i18n;

pub use format::*;
pub use i18n::*;
