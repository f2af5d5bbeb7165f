use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::rules::{self, Rule};

/// Declared purpose of a dividend transaction, selecting which rule set
/// applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Create a new dividend with a fresh identity and no predecessor.
    Issue,
    /// Hand one or more dividends to different funds.
    ChangeOwner,
    /// Replace one dividend version with an updated one.
    Amend,
    /// Consume a dividend with no successor.
    Cancel,
}

impl Intent {
    /// Parses an intent carried as a string by hosts with an extensible
    /// command representation.
    pub fn from_name(name: &str) -> Result<Self, ContractError> {
        match name {
            "Issue" => Ok(Intent::Issue),
            "ChangeOwner" => Ok(Intent::ChangeOwner),
            "Amend" => Ok(Intent::Amend),
            "Cancel" => Ok(Intent::Cancel),
            other => Err(ContractError::UnknownIntent(other.to_string())),
        }
    }

    /// The rule table evaluated for this intent, in reporting order.
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Intent::Issue => rules::ISSUE,
            Intent::ChangeOwner => rules::CHANGE_OWNER,
            Intent::Amend => rules::AMEND,
            Intent::Cancel => rules::CANCEL,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Issue => "Issue",
            Intent::ChangeOwner => "ChangeOwner",
            Intent::Amend => "Amend",
            Intent::Cancel => "Cancel",
        };
        write!(f, "{}", name)
    }
}
