//! Error adapter for converting SeqdrawError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Input errors are
//! rendered with a snippet of the offending JSON document.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use seqdraw::{SeqdrawError, input::InputError};

/// Adapter for an error in the input document.
pub struct InputDiagnostic<'a> {
    err: &'a InputError,
    /// Source document for displaying snippets
    src: &'a str,
}

impl<'a> InputDiagnostic<'a> {
    pub fn new(err: &'a InputError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for InputDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for InputDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for InputDiagnostic<'_> {}

impl MietteDiagnostic for InputDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("seqdraw::input"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            InputError::NoteActorCount { .. } => Some(Box::new(
                "`left_of` and `right_of` take one actor, `over` takes one or two",
            )),
            InputError::Syntax(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (line, column) = self.err.location()?;
        let span = span_at(self.src, line, column);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`SeqdrawError`] variants without a source document.
pub struct ErrorAdapter<'a>(pub &'a SeqdrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(error_code(self.0)))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// An input error with its location in the document.
    Input(InputDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Input(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Input(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Input(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Input(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Input(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Splits an error into independently rendered reports.
pub fn to_reportables(err: &SeqdrawError) -> Vec<Reportable<'_>> {
    match err {
        SeqdrawError::Input { err, src } => vec![Reportable::Input(InputDiagnostic::new(err, src))],
        other => vec![Reportable::Error(ErrorAdapter(other))],
    }
}

/// Renders every report of `err` with `handler`, one string per report.
///
/// A report the handler fails to format falls back to its plain message.
pub fn render_reports(err: &SeqdrawError, handler: &GraphicalReportHandler) -> Vec<String> {
    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut out = String::new();
            match handler.render_report(&mut out, reportable) {
                Ok(()) => out,
                Err(_) => reportable.to_string(),
            }
        })
        .collect()
}

/// Stable diagnostic code for an error.
pub fn error_code(err: &SeqdrawError) -> &'static str {
    match err {
        SeqdrawError::Io(_) => "seqdraw::io",
        SeqdrawError::Input { .. } => "seqdraw::input",
        SeqdrawError::Config(_) => "seqdraw::config",
        SeqdrawError::Layout(_) => "seqdraw::layout",
        SeqdrawError::Render(_) => "seqdraw::render",
        SeqdrawError::Export(_) => "seqdraw::export",
    }
}

/// One-character span at a one-based line and column, clamped to `src`.
fn span_at(src: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    SourceSpan::new(offset.into(), len)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_span_at() {
        let src = "{\n  \"a\": x\n}";
        let span = span_at(src, 2, 8);
        assert_eq!(span.offset(), 9);
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "x");
    }

    #[test]
    fn test_span_at_is_clamped() {
        let span = span_at("{}", 5, 40);
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_input_errors_have_snippets() {
        let src = "{ \"items\": [{ \"kind\": \"box\" }] }";
        let err = seqdraw::DiagramBuilder::default().parse(src).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        let reportable = &reportables[0];
        assert_eq!(reportable.code().unwrap().to_string(), "seqdraw::input");
        assert!(reportable.source_code().is_some());
        assert_eq!(reportable.labels().unwrap().count(), 1);
    }

    #[test]
    fn test_render_reports_include_code_and_snippet() {
        let src = "{ \"actors\": [\"A\"],\n  \"items\": [{ \"kind\": \"box\" }] }";
        let err = seqdraw::DiagramBuilder::default().parse(src).unwrap_err();
        let handler =
            GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor());

        let reports = render_reports(&err, &handler);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("seqdraw::input"));
        assert!(reports[0].contains("here"));
    }

    #[test]
    fn test_plain_errors_have_codes() {
        let err = SeqdrawError::Io(io::Error::other("boom"));
        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].code().unwrap().to_string(), "seqdraw::io");
        assert!(reportables[0].labels().is_none());
        assert_eq!(error_code(&SeqdrawError::Config(String::new())), "seqdraw::config");
    }
}
