//! Logging setup for the Elegance storefront tools.
//!
//! Libraries emit through `tracing`; binaries call [`init_logging`] once at
//! startup to install a subscriber.

mod logging;

pub use logging::*;
