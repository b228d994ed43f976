mod controller;
mod progress;
mod steps;

use chrono::{DateTime, TimeZone, Utc};
use types::{CeremonySnapshot, Copayer, WalletCopayer, WalletInfo};

pub fn proposal_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn snapshot() -> CeremonySnapshot {
    CeremonySnapshot::new("Alice", proposal_date())
}

pub fn three_copayers() -> Vec<Copayer> {
    vec![
        Copayer::new("c1", "Alice"),
        Copayer::new("c2", "Bob"),
        Copayer::new("c3", "Carol"),
    ]
}

pub fn wallet() -> WalletInfo {
    WalletInfo::new(
        three_copayers()
            .into_iter()
            .map(|c| WalletCopayer {
                id: c.id,
                name: c.name,
            })
            .collect(),
    )
}
