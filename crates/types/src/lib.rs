pub mod copayer;
pub mod errors;
pub mod event;
pub mod signing;
pub mod snapshot;

#[macro_use]
pub mod macros;

pub use copayer::{Copayer, CopayerSignStatus, WalletCopayer, WalletInfo};
pub use event::{CeremonyEvent, RoundEventKind};
pub use signing::{SigningProgress, SigningStatus};
pub use snapshot::{CeremonySnapshot, TrackerContext};
