pub mod identity;
pub mod party;
pub mod state;

pub use identity::UniqueId;
pub use party::{OwningKey, Party, PartyError};
pub use state::DividendState;
