use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier linking successive versions of the same logical
/// record.
///
/// Survives amendments and ownership changes; a newly issued record
/// always gets a fresh one. Distinct from whatever storage key the host
/// assigns to each version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniqueId(Uuid);

impl UniqueId {
    /// Draws a fresh collision-resistant identifier.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an identifier supplied by the host, e.g. during replay.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(UniqueId::fresh(), UniqueId::fresh());
    }
}
