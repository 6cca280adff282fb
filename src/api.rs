//! WASM API for the WXR decoder
//!
//! JavaScript hands over the raw export bytes (e.g. from a `File` read as an
//! `ArrayBuffer`) and receives either the decoded export or an `Error` whose
//! message is the aggregate report.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::ExportDocument;
use crate::wxr::{decode_with_options, DecodeOptions};

// Logging macros for WASM
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log(&format!("[WASM] {}", format!($($arg)*)))
    };
}

macro_rules! wasm_info {
    ($($arg:tt)*) => {
        info(&format!("[WASM] {}", format!($($arg)*)))
    };
}

macro_rules! wasm_error {
    ($($arg:tt)*) => {
        error(&format!("[WASM] ❌ {}", format!($($arg)*)))
    };
}

/// Parse optional JSON settings into [`DecodeOptions`]
pub fn parse_options(options_json: Option<&str>) -> Result<DecodeOptions, String> {
    match options_json {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(json).map_err(|e| format!("Options parse error: {}", e))
        }
        _ => Ok(DecodeOptions::default()),
    }
}

/// Decode with JSON settings; errors are rendered as the full report
pub fn decode_export(bytes: &[u8], options_json: Option<&str>) -> Result<ExportDocument, String> {
    let options = parse_options(options_json)?;
    decode_with_options(bytes, &options).map_err(|e| e.to_string())
}

/// Decode and serialize the export to a JSON string
pub fn decode_export_json(bytes: &[u8], options_json: Option<&str>) -> Result<String, String> {
    let export = decode_export(bytes, options_json)?;
    serde_json::to_string(&export).map_err(|e| format!("Export serialization error: {}", e))
}

/// Decode a WXR export into a JavaScript object
///
/// # Parameters
/// - `bytes`: the whole export file
/// - `options_json`: optional JSON `{"source_name": "...", "nodes_limit": n}`
///
/// # Returns
/// The decoded export; on failure an `Error` whose message lists every diagnostic
#[wasm_bindgen(js_name = decodeWxr)]
pub fn decode_wxr(bytes: &[u8], options_json: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("decodeWxr called");
    wasm_log!("  Input: {} bytes", bytes.len());

    let export = decode_export(bytes, options_json.as_deref()).map_err(|e| {
        wasm_error!("WXR decode error: {}", e);
        JsValue::from(js_sys::Error::new(&e))
    })?;

    wasm_log!(
        "  Decoded {} posts, {} authors",
        export.posts.len(),
        export.authors.len()
    );

    // Plain objects, so `authors[login]` works on the JS side
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let value = export.serialize(&serializer).map_err(|e| {
        wasm_error!("Export serialization error: {}", e);
        JsValue::from_str(&format!("WASM serialization error: {}", e))
    })?;

    wasm_info!("decodeWxr completed successfully");
    Ok(value)
}

/// Decode a WXR export and return it as a JSON string
#[wasm_bindgen(js_name = decodeWxrJson)]
pub fn decode_wxr_json(bytes: &[u8], options_json: Option<String>) -> Result<String, JsValue> {
    wasm_info!("decodeWxrJson called");

    let json = decode_export_json(bytes, options_json.as_deref()).map_err(|e| {
        wasm_error!("WXR decode error: {}", e);
        JsValue::from(js_sys::Error::new(&e))
    })?;

    wasm_info!("decodeWxrJson completed: {} bytes of JSON", json.len());
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &[u8] = br#"<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/">
<channel><wp:wxr_version>1.2</wp:wxr_version></channel></rss>"#;

    #[test]
    fn test_parse_options_defaults() {
        assert_eq!(parse_options(None).unwrap(), DecodeOptions::default());
        assert_eq!(parse_options(Some("  ")).unwrap(), DecodeOptions::default());
    }

    #[test]
    fn test_parse_options_partial_json() {
        let options = parse_options(Some(r#"{"source_name": "site.xml"}"#)).unwrap();
        assert_eq!(options.source_name.as_deref(), Some("site.xml"));
        assert_eq!(options.nodes_limit, u32::MAX);
    }

    #[test]
    fn test_parse_options_rejects_bad_json() {
        let err = parse_options(Some("{not json")).unwrap_err();
        assert!(err.starts_with("Options parse error"));
    }

    #[test]
    fn test_decode_export_json_shape() {
        let json = decode_export_json(MINIMAL, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.2");
        assert!(value["authors"].as_object().unwrap().is_empty());
        assert!(value["posts"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_decode_export_reports_source_name() {
        let err = decode_export(b"<rss><channel>", Some(r#"{"source_name": "cut.xml"}"#)).unwrap_err();
        assert!(err.contains("cut.xml"), "report should name the source: {}", err);
    }
}
