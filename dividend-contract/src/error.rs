use thiserror::Error;

/// Errors returned by contract verification.
///
/// A transaction is wholly accepted or wholly rejected; nothing here is
/// retried automatically. The proposer corrects the transaction and
/// resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Zero or more than one intent command attached to the transaction.
    #[error("Ambiguous intent: expected exactly one command, found {0}")]
    AmbiguousIntent(usize),

    /// An intent outside the closed set. Unreachable through [`Intent`]
    /// itself; hosts that carry intents as strings hit this at parse
    /// time.
    ///
    /// [`Intent`]: crate::intent::Intent
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    /// Exactly one contract rule failed; carries that rule's fixed
    /// message.
    #[error("Contract rule violated: {0}")]
    RuleViolation(&'static str),
}
