//! Document loader
//!
//! Turns raw bytes into a roxmltree tree. The reader never resolves external
//! entities, and DTDs are refused outright so a DOCTYPE cannot smuggle in
//! entity expansion.

use roxmltree::{Document, ParsingOptions};

use crate::diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSeverity};

use super::options::DecodeOptions;

const UTF8_BOM: &str = "\u{FEFF}";

/// Parse `bytes` into a navigable tree, or return every diagnostic reported
pub fn load_document<'a>(
    bytes: &'a [u8],
    options: &DecodeOptions,
) -> Result<Document<'a>, Vec<Diagnostic>> {
    let mut log = DiagnosticLog::new(options.source_name.clone());

    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let (line, column) = position_of(&bytes[..e.valid_up_to()]);
            log.push(Diagnostic::new(
                DiagnosticSeverity::Fatal,
                "InvalidUtf8",
                format!("input is not valid UTF-8: {}", e),
                line,
                column,
            ));
            return Err(log.into_vec());
        }
    };
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut parsing = ParsingOptions::default();
    parsing.allow_dtd = false;
    parsing.nodes_limit = options.nodes_limit;

    match Document::parse_with_options(text, parsing) {
        Ok(doc) => log.finish(doc),
        Err(e) => {
            log.push(diagnostic_from(&e));
            Err(log.into_vec())
        }
    }
}

/// Map a reader error to a diagnostic; roxmltree stops at the first error,
/// so every one of them is fatal
fn diagnostic_from(error: &roxmltree::Error) -> Diagnostic {
    let pos = error.pos();
    Diagnostic::new(
        DiagnosticSeverity::Fatal,
        error_code(error),
        error.to_string(),
        pos.row,
        pos.col,
    )
}

/// Stable code for a reader error, named after its variant
fn error_code(error: &roxmltree::Error) -> &'static str {
    use roxmltree::Error;

    match error {
        Error::DtdDetected { .. } => "DtdDetected",
        Error::NodesLimitReached { .. } => "NodesLimitReached",
        Error::AttributesLimitReached { .. } => "AttributesLimitReached",
        Error::NamespacesLimitReached { .. } => "NamespacesLimitReached",
        Error::UnknownNamespace { .. } => "UnknownNamespace",
        Error::DuplicatedNamespace { .. } => "DuplicatedNamespace",
        Error::UnexpectedCloseTag { .. } => "UnexpectedCloseTag",
        Error::UnknownEntityReference { .. } => "UnknownEntityReference",
        Error::EntityReferenceLoop { .. } => "EntityReferenceLoop",
        Error::DuplicatedAttribute { .. } => "DuplicatedAttribute",
        Error::NoRootNode { .. } => "NoRootNode",
        Error::UnclosedRootNode { .. } => "UnclosedRootNode",
        Error::UnexpectedEndOfStream { .. } => "UnexpectedEndOfStream",
        _ => "XmlError",
    }
}

/// 1-based line/column just past `prefix`
fn position_of(prefix: &[u8]) -> (u32, u32) {
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = match prefix.iter().rposition(|&b| b == b'\n') {
        Some(newline) => prefix.len() - newline,
        None => prefix.len() + 1,
    };
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_counts_lines_and_columns() {
        assert_eq!(position_of(b""), (1, 1));
        assert_eq!(position_of(b"abc"), (1, 4));
        assert_eq!(position_of(b"ab\ncd"), (2, 3));
        assert_eq!(position_of(b"ab\n"), (2, 1));
    }

    #[test]
    fn test_doctype_is_rejected() {
        let xml = b"<?xml version=\"1.0\"?>\n<!DOCTYPE rss>\n<rss version=\"2.0\"><channel/></rss>";
        let diags = load_document(xml, &DecodeOptions::default()).unwrap_err();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, "DtdDetected");
        assert_eq!(diags[0].severity, DiagnosticSeverity::Fatal);
    }

    #[test]
    fn test_reader_errors_map_to_codes() {
        let options = DecodeOptions::default();
        let code = |xml: &str| load_document(xml.as_bytes(), &options).unwrap_err()[0].code.clone();

        assert_eq!(code("<rss><wp:x/></rss>"), "UnknownNamespace");
        assert_eq!(code("<rss><channel></rss>"), "UnexpectedCloseTag");
        assert_eq!(code("<rss a=\"1\" a=\"2\"/>"), "DuplicatedAttribute");
        assert_eq!(code("<rss>&nope;</rss>"), "UnknownEntityReference");
    }

    #[test]
    fn test_nodes_limit_has_its_own_code() {
        let options = DecodeOptions::default().with_nodes_limit(2);
        let xml = b"<rss><channel/><channel/><channel/></rss>";
        let diags = load_document(xml, &options).unwrap_err();
        assert_eq!(diags[0].code, "NodesLimitReached");
    }

    #[test]
    fn test_bom_is_skipped() {
        let xml = "\u{FEFF}<rss><channel/></rss>";
        assert!(load_document(xml.as_bytes(), &DecodeOptions::default()).is_ok());
    }

    #[test]
    fn test_invalid_utf8_reports_position() {
        let bytes = b"<rss>\n<ch\xffannel/></rss>";
        let diags = load_document(bytes, &DecodeOptions::default()).unwrap_err();
        assert_eq!(diags[0].code, "InvalidUtf8");
        assert_eq!((diags[0].line, diags[0].column), (2, 4));
    }

    #[test]
    fn test_source_name_is_stamped() {
        let options = DecodeOptions::default().with_source_name("broken.xml");
        let diags = load_document(b"<rss><channel></rss>", &options).unwrap_err();
        assert_eq!(diags[0].source_file.as_deref(), Some("broken.xml"));
    }
}
