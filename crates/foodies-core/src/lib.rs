//! Core abstractions for the Foodies storefront.
//!
//! This crate provides the pieces every other crate agrees on:
//! - `SiteConfig` - Storage slot, labels, currency glyph and timer delays
//! - `selectors` - The DOM contract the page markup has to honour
//! - `Action` - The delegated click/input dispatch table

mod action;
mod config;
mod error;
pub mod selectors;

pub use action::*;
pub use config::*;
pub use error::*;
