//! Actor that owns a `UserStore` and applies requests one at a time.

mod actor;
mod messages;

pub use actor::UserActor;
pub use messages::*;
