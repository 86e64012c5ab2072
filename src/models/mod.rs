pub mod status;
pub mod tracking;

pub use status::{RawStatus, StatusCode, INCIDENT_WIRE, STATUS_ORDER, STEP_COUNT};
pub use tracking::{ApiErrorBody, HistoryEntry, TrackingResult, DEFAULT_DESCRIPTION};
