//! Observability for the Foodies storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one page load
//! - `StructuredLogger` - Structured logging with session and component context
//!
//! In the browser log lines go to the devtools console; natively they go to
//! stderr.

mod clock;
mod logging;
mod session;

pub use logging::*;
pub use session::*;
