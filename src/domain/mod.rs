pub mod account;
pub mod common;
pub mod ledger;
pub mod movement;

pub use account::Account;
pub use common::{Amounted, Displayable, Identifiable, NamedEntity};
pub use ledger::Ledger;
pub use movement::{Movement, MovementKind};
