
use chrono::{TimeZone, Utc};
use tracker::TrackerConfig;
use types::{CeremonySnapshot, WalletCopayer, WalletInfo};

use crate::CeremonySession;

pub fn wallet() -> WalletInfo {
    WalletInfo::new(
        [("c1", "Alice"), ("c2", "Bob"), ("c3", "Carol")]
            .into_iter()
            .map(|(id, name)| WalletCopayer {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    )
}

pub fn snapshot() -> CeremonySnapshot {
    CeremonySnapshot::new("Bob", Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
        .with_wallet(wallet())
        .with_txp_creator("c2")
}

pub fn session() -> CeremonySession {
    CeremonySession::new(Some("txp-1"), snapshot(), &TrackerConfig::default())
}
