//! Error rendering using ariadne
//!
//! This module draws an [`Error`] under the expression it came from, with the
//! failing range underlined and any help text attached.

use crate::{Error, ErrorCode};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use exprs::{evaluate, render_error};
///
/// match evaluate("1 + 'a' * 2") {
///     Err(e) => render_error(&e),
///     Ok(_) => {}
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.diagnostic();
    let source = error.source_text();

    // Spans are byte ranges; clamp them in case the source is empty.
    let end = diag.span.0.end.min(source.len());
    let start = diag.span.0.start.min(end);
    let span = start..end;

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match error.code() {
        ErrorCode::Resource => ReportKind::Custom("Resource error", ariadne::Color::Red),
        _ => ReportKind::Error,
    };

    let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
        .with_code(&diag.code)
        .with_message(&diag.message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(error.code().description())
            .with_color(color),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
