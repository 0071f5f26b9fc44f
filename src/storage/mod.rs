//! In-memory collections owned by the library service.

mod catalog;
mod ledger;
mod membership;

pub use catalog::*;
pub use ledger::*;
pub use membership::*;
