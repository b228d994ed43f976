pub mod config;
pub mod controller;
pub mod copayers;
pub mod labels;
pub mod progress;
pub mod steps;
pub mod visibility;

pub use config::TrackerConfig;
pub use controller::{TssProgressController, ViewState};
pub use copayers::{CopayerSignatureTracker, CopayerUpdate, CopayerUpdateReason};
pub use labels::{ButtonIndicator, button_label, button_label_wire};
pub use progress::{estimate_progress, estimate_progress_wire};
pub use steps::{Step, StepIcon, StepPayload, StepState, StepView, step_status};
pub use visibility::Visibility;

pub type CopayersCallback = Box<dyn FnMut(Vec<types::Copayer>) + Send>;
pub type VisibilityCallback = Box<dyn FnMut(bool) + Send>;

#[cfg(test)]
mod tests;
