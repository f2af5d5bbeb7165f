use std::collections::BTreeSet;

use dividend_common::OwningKey;

use crate::transaction::LedgerTransaction;

/// Upper bound on a newly issued dividend's value, exclusive.
pub const MAX_DIVIDEND_VALUE: i64 = 10_000_000;

/// One contract rule: a predicate over the transaction snapshot and the
/// deduplicated signer set, plus the fixed message reported when it
/// fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub message: &'static str,
    pub check: fn(&LedgerTransaction, &BTreeSet<OwningKey>) -> bool,
}

pub(crate) static ISSUE: &[Rule] = &[
    Rule {
        message: "No inputs should be consumed when issuing a dividend.",
        check: |tx, _| tx.inputs.is_empty(),
    },
    Rule {
        message: "Only one output should be created when issuing a dividend.",
        check: |tx, _| tx.outputs.len() == 1,
    },
    Rule {
        message: "All participants must sign when issuing a dividend.",
        check: signers_cover_outputs,
    },
    Rule {
        message: "The dividend's value must be positive.",
        check: |tx, _| tx.outputs.iter().all(|state| state.value > 0),
    },
    Rule {
        message: "The dividend's value must be less than 10 million.",
        check: |tx, _| tx.outputs.iter().all(|state| state.value < MAX_DIVIDEND_VALUE),
    },
];

pub(crate) static CHANGE_OWNER: &[Rule] = &[
    Rule {
        message: "At least one input should be consumed when changing ownership of a dividend.",
        check: |tx, _| !tx.inputs.is_empty(),
    },
    Rule {
        message: "At least one output should be created when changing ownership of a dividend.",
        check: |tx, _| !tx.outputs.is_empty(),
    },
    Rule {
        message: "All participants must sign when changing ownership of a dividend.",
        check: signers_cover_outputs,
    },
];

// Known gap carried over from the original rule set: Amend and Cancel
// check counts only. Nothing ties the output back to the consumed
// input's identity, fund, or value, and neither intent demands
// signatures.
pub(crate) static AMEND: &[Rule] = &[
    Rule {
        message: "Only one input should be consumed when amending a dividend.",
        check: |tx, _| tx.inputs.len() == 1,
    },
    Rule {
        message: "Only one output should be created when amending a dividend.",
        check: |tx, _| tx.outputs.len() == 1,
    },
];

pub(crate) static CANCEL: &[Rule] = &[
    Rule {
        message: "Only one input should be consumed when cancelling a dividend.",
        check: |tx, _| tx.inputs.len() == 1,
    },
    Rule {
        message: "Zero outputs should be created when cancelling a dividend.",
        check: |tx, _| tx.outputs.is_empty(),
    },
];

/// Every party participating in an output must appear in the signer set.
///
/// The required set is the union of participants over all outputs, so a
/// fund appearing on two outputs only has to sign once.
fn signers_cover_outputs(tx: &LedgerTransaction, signers: &BTreeSet<OwningKey>) -> bool {
    let required: BTreeSet<OwningKey> = tx
        .outputs
        .iter()
        .flat_map(|state| state.participants())
        .map(|party| party.owning_key)
        .collect();
    required.is_subset(signers)
}
