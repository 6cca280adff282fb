//! Models module for decoded WXR exports
//!
//! Plain owned data produced once per decode call. Every sequence keeps
//! document order; nothing here is sorted or deduplicated.

pub mod document;
pub mod post;
pub mod taxonomy;

// Re-export commonly used types
pub use document::*;
pub use post::*;
pub use taxonomy::*;
