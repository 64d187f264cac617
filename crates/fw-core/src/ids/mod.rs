//! ID type wrappers for type safety.

mod id_macro;
pub mod member;

pub use member::{GroupId, UserId};
