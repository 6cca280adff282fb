//! WordPress eXtended RSS (WXR) decoder
//!
//! Decodes a WordPress export document into owned Rust structures: authors,
//! categories, tags, generic terms, and posts with their comments and meta.
//! The same decoder is exposed to JavaScript through `wasm-bindgen`.

pub mod api;
pub mod diagnostics;
pub mod models;
pub mod wxr;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
pub use models::*;
pub use wxr::{decode, decode_with_options, DecodeError, DecodeOptions, DecodeResult};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        // A second init (e.g. module re-instantiated) keeps the existing logger
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    log::info!("WXR decoder WASM module initialized");
}
