//! Static page content.

mod contact;

pub use contact::{ChannelKind, ContactChannel, OpeningHours, StoreInfo};
