pub mod app;
pub mod detail_panel;
pub mod progress_timeline;
pub mod tracker_card;
pub mod tracking_form;

pub use app::App;
pub use detail_panel::DetailPanel;
pub use progress_timeline::ProgressTimeline;
pub use tracker_card::TrackerCard;
pub use tracking_form::TrackingForm;
