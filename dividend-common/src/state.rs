use serde::{Deserialize, Serialize};

use crate::identity::UniqueId;
use crate::party::Party;

/// One dividend entitlement owed to a fund.
///
/// Immutable once constructed: every transition produces a successor
/// instance instead of mutating in place, and `linear_id` links the
/// versions. The value bound (`0 < value < 10 million`) is an
/// issuance-time contract rule rather than a constructor invariant,
/// because the same type carries pre-issuance candidate outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendState {
    pub value: i64,
    pub fund: Party,
    pub linear_id: UniqueId,
}

impl DividendState {
    /// A logically new record with a fresh identity.
    pub fn new(value: i64, fund: Party) -> Self {
        Self {
            value,
            fund,
            linear_id: UniqueId::fresh(),
        }
    }

    /// A record with an identity supplied by the caller, e.g. a
    /// successor version or a replayed snapshot.
    pub fn with_id(value: i64, fund: Party, linear_id: UniqueId) -> Self {
        Self {
            value,
            fund,
            linear_id,
        }
    }

    /// Parties whose signature is required to authorize any transition
    /// touching this record. Currently just the receiving fund.
    pub fn participants(&self) -> Vec<&Party> {
        vec![&self.fund]
    }

    /// Successor version with a different value, same identity.
    pub fn amended(&self, value: i64) -> Self {
        Self {
            value,
            fund: self.fund.clone(),
            linear_id: self.linear_id,
        }
    }

    /// Successor version owned by a different fund, same identity.
    pub fn reassigned(&self, fund: Party) -> Self {
        Self {
            value: self.value,
            fund,
            linear_id: self.linear_id,
        }
    }

    /// Whether `other` is a version of the same logical record.
    pub fn is_same_entity(&self, other: &DividendState) -> bool {
        self.linear_id == other.linear_id
    }
}
