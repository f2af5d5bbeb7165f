use crate::error::ContractError;
use crate::transaction::LedgerTransaction;

/// The dividend contract: decides whether a proposed state transition
/// is legal.
///
/// Verification is pure and stateless. Each call evaluates one
/// immutable snapshot and leaves no trace, so any number of independent
/// transactions validate concurrently without coordination, and
/// re-verifying the same snapshot always yields the same result.
pub struct DividendContract;

impl DividendContract {
    /// Identifier the host platform uses to attach this contract to
    /// dividend states.
    pub const CONTRACT_ID: &'static str = "dividend/DividendContract";

    /// Validates the transaction against the rule set of its declared
    /// intent, failing on the first violated rule with that rule's
    /// fixed message.
    pub fn verify(tx: &LedgerTransaction) -> Result<(), ContractError> {
        let command = match tx.commands.as_slice() {
            [command] => command,
            other => {
                tracing::error!(
                    "❌ Rejected transaction: expected one intent command, found {}",
                    other.len()
                );
                return Err(ContractError::AmbiguousIntent(other.len()));
            }
        };

        let signers = command.signer_set();
        tracing::debug!(
            "Verifying {} transaction: {} inputs, {} outputs, {} signers",
            command.intent,
            tx.inputs.len(),
            tx.outputs.len(),
            signers.len()
        );

        for rule in command.intent.rules() {
            if !(rule.check)(tx, &signers) {
                tracing::warn!("⚠️ {} rejected: {}", command.intent, rule.message);
                return Err(ContractError::RuleViolation(rule.message));
            }
        }

        Ok(())
    }
}
