pub mod error;
pub mod tracking_service;

pub use error::{TrackingError, EMPTY_CODE_MESSAGE, GENERIC_ERROR_MESSAGE};
pub use tracking_service::TrackingService;
