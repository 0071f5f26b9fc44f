mod book;
mod member;
mod policy;
mod transaction;

pub use book::*;
pub use member::*;
pub use policy::*;
pub use transaction::*;
