pub mod use_tracking;

pub use use_tracking::{use_tracking, UseTrackingHandle};
