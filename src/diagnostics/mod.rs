//! Diagnostics collected while loading an export
//!
//! The XML reader reports well-formedness problems as structured
//! [`Diagnostic`] values. A [`DiagnosticLog`] buffers them for the duration of
//! one decode call; nothing is shared between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level, mirroring the reader's warning/error/fatal classes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Fatal => "fatal",
        };
        f.write_str(label)
    }
}

/// One problem reported by the XML reader
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    /// Stable identifier of the problem kind (e.g. `DtdDetected`)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Name of the input, when the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
}

impl Diagnostic {
    pub fn new(
        severity: DiagnosticSeverity,
        code: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            line,
            column,
            source_file: None,
        }
    }

    pub fn with_source_file(mut self, source_file: Option<String>) -> Self {
        self.source_file = source_file;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ", self.severity, self.code)?;
        if let Some(file) = &self.source_file {
            write!(f, "{}:", file)?;
        }
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Per-call diagnostic buffer
///
/// Created at the start of a load and consumed by [`DiagnosticLog::finish`]
/// or [`DiagnosticLog::into_vec`]; dropping it discards whatever was buffered.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    source_file: Option<String>,
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new(source_file: Option<String>) -> Self {
        Self {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Record a diagnostic, stamping it with this log's source file
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let diagnostic = diagnostic.with_source_file(self.source_file.clone());
        log::debug!("buffered diagnostic: {}", diagnostic);
        self.entries.push(diagnostic);
    }

    /// `Ok(value)` when nothing was buffered, otherwise every entry
    pub fn finish<T>(self, value: T) -> Result<T, Vec<Diagnostic>> {
        if self.entries.is_empty() {
            Ok(value)
        } else {
            Err(self.entries)
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// Render every diagnostic, one per line, in the order they were reported
pub fn format_report(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
