pub mod contract;
pub mod error;
pub mod intent;
pub mod rules;
pub mod transaction;

pub use contract::DividendContract;
pub use error::ContractError;
pub use intent::Intent;
pub use transaction::{Command, LedgerTransaction};
