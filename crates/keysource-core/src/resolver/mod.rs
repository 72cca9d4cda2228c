//! Credential resolution cascade
//!
//! A single entry point that searches the fixed source order —
//! environment, `.env`, vault — and returns the first value found with
//! its origin attached.

mod key_resolver;

pub use key_resolver::{KeyResolver, ResolveOptions, ResolvedKey, Source};
