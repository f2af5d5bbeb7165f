use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use dividend_common::{DividendState, OwningKey};

use crate::intent::Intent;

/// One declared intent plus the signer identities the host's signature
/// layer has already verified for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub intent: Intent,
    pub signers: Vec<OwningKey>,
}

impl Command {
    pub fn new(intent: Intent, signers: Vec<OwningKey>) -> Self {
        Self { intent, signers }
    }

    /// Deduplicated signer set. Order independent: a key listed twice
    /// counts once.
    pub fn signer_set(&self) -> BTreeSet<OwningKey> {
        self.signers.iter().copied().collect()
    }
}

/// Immutable snapshot of a proposed state transition: the records it
/// consumes, the records it produces, and its commands.
///
/// The contract only borrows the snapshot for the duration of one
/// `verify` call and never retains or mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    pub inputs: Vec<DividendState>,
    pub outputs: Vec<DividendState>,
    pub commands: Vec<Command>,
}

impl LedgerTransaction {
    pub fn new(
        inputs: Vec<DividendState>,
        outputs: Vec<DividendState>,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            inputs,
            outputs,
            commands,
        }
    }
}
