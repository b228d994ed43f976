use tracker::ViewState;
use types::CeremonyEvent;

pub mod ceremony_interface;
pub mod handle;
pub mod main_loop;
pub mod session;

pub use ceremony_interface::{CeremonyInterface, CeremonyInterfaceImpl};
pub use handle::CeremonyHandle;
pub use session::CeremonySession;

#[derive(Debug, Clone)]
pub enum CeremonyMessage {
    Event { event: CeremonyEvent },
    RawStatus { status: String },
    OpenPanel,
    ClosePanel,
    GetViewState,
}

#[derive(Debug, Clone)]
pub enum CeremonyResponse {
    Event { copayers_changed: bool },
    Panel { visible: bool },
    ViewState { view: Box<ViewState> },
}

#[cfg(test)]
mod tests;
