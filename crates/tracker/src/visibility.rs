use std::fmt;

use crate::VisibilityCallback;

/// Who owns the progress panel's visible flag.
///
/// With `External` the host keeps the flag (passed back in on each snapshot)
/// and is asked to change it through the callback; `Internal` keeps it here.
pub enum Visibility {
    Internal { visible: bool },
    External { on_change: VisibilityCallback },
}

impl Visibility {
    #[must_use]
    pub const fn internal() -> Self {
        Self::Internal { visible: false }
    }

    #[must_use]
    pub fn external(on_change: VisibilityCallback) -> Self {
        Self::External { on_change }
    }

    pub fn set(&mut self, visible: bool) {
        match self {
            Self::Internal { visible: current } => *current = visible,
            Self::External { on_change } => on_change(visible),
        }
    }

    /// A flag supplied by the host wins over the internal one.
    #[must_use]
    pub const fn resolve(&self, host_flag: Option<bool>) -> bool {
        match host_flag {
            Some(visible) => visible,
            None => match self {
                Self::Internal { visible } => *visible,
                Self::External { .. } => false,
            },
        }
    }

    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::internal()
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal { visible } => f
                .debug_struct("Internal")
                .field("visible", visible)
                .finish(),
            Self::External { .. } => f.debug_struct("External").finish_non_exhaustive(),
        }
    }
}
