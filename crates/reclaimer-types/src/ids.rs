//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Every persisted calculation run gets a [`RunId`] using UUID v7
//! (time-ordered) so history entries sort by creation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for one calculation run recorded in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RunId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RunId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let first = RunId::new();
        let second = RunId::new();
        assert_ne!(first, second);
        assert_eq!(first.into_inner().get_version_num(), 7);
    }

    #[test]
    fn serializes_as_bare_uuid() {
        let id = RunId::from(Uuid::nil());
        let json = serde_json::to_string(&id).ok();
        assert_eq!(
            json.as_deref(),
            Some("\"00000000-0000-0000-0000-000000000000\"")
        );
    }
}
