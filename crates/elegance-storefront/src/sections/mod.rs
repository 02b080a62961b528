//! Section renderers.

mod card;
mod collection;
mod contact;
mod grid;
mod header;
mod not_found;

pub use card::*;
pub use collection::*;
pub use contact::*;
pub use grid::*;
pub use header::*;
pub use not_found::*;
