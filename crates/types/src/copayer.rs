use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A wallet participant whose signature share the ceremony needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copayer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub signed: bool,
}

impl Copayer {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            signed: false,
        }
    }

    #[must_use]
    pub fn with_signed(&self, signed: bool) -> Self {
        Self {
            signed,
            ..self.clone()
        }
    }
}

impl From<&WalletCopayer> for Copayer {
    fn from(copayer: &WalletCopayer) -> Self {
        Self::new(copayer.id.clone(), copayer.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletCopayer {
    pub id: String,
    pub name: String,
}

/// The slice of a shared wallet the tracker reads copayers from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    #[serde(default)]
    pub copayers: Option<Vec<WalletCopayer>>,
}

impl WalletInfo {
    #[must_use]
    pub const fn new(copayers: Vec<WalletCopayer>) -> Self {
        Self {
            copayers: Some(copayers),
        }
    }

    /// Fresh, unsigned copayer records. A wallet with no copayer list seeds an
    /// empty one.
    #[must_use]
    pub fn initial_copayers(&self) -> Vec<Copayer> {
        self.copayers
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Copayer::from)
            .collect()
    }
}

/// Per-copayer notification emitted by the signing driver.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopayerSignStatus {
    #[display("joined")]
    Joined,
    #[display("signed")]
    Signed,
}
