//! Error type hierarchy for descriptor construction
//!
//! Every fallible operation in the crate reports a [`DescriptorError`]: an
//! [`ErrorKind`] plus a message and optional context (source span, note,
//! help). Batch operations gather several of them into an [`ErrorCollection`].

mod conversions;

use colored::*;
use std::fmt;

/// Source location information for error reporting (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Span information for multi-character error ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn single(location: SourceLocation) -> Self {
        Self {
            start: location.clone(),
            end: location,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    pub span: Option<Span>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for descriptor construction
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl DescriptorError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Shorthand for the error every factory raises on a blank identifier.
    pub fn empty_name(what: &str) -> Self {
        Self::new(ErrorKind::EmptyName, format!("{} name must not be empty", what))
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Name validation
    EmptyName,
    InvalidName,
    DuplicateName,

    // Definition resolution
    UnknownType,
    UndeclaredProperty,

    // Input / output
    ParseError,
    SerializationError,
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyName => "empty name",
            ErrorKind::InvalidName => "invalid name",
            ErrorKind::DuplicateName => "duplicate name",
            ErrorKind::UnknownType => "unknown type",
            ErrorKind::UndeclaredProperty => "undeclared property",
            ErrorKind::ParseError => "parse error",
            ErrorKind::SerializationError => "serialization error",
            ErrorKind::IoError => "I/O error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.span {
            Some(span) => write!(f, "{}: {}: {}", span, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for DescriptorError {}

/// Format error with a snippet of the definition source it points into
pub struct ErrorFormatter<'a> {
    error: &'a DescriptorError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a DescriptorError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(span) = &self.error.context.span {
            let location = match self.filename {
                Some(filename) => format!("{}:{}:{}", filename, span.start.line, span.start.column),
                None => format!("{}:{}", span.start.line, span.start.column),
            };
            output.push_str(&self.paint(location, |s| s.bold()));
            output.push_str(": ");
        } else if let Some(filename) = self.filename {
            output.push_str(&self.paint(filename.to_string(), |s| s.bold()));
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = self.paint(error_kind, |s| s.red().bold());
        output.push_str(&format!("{}: {}\n", error_label, self.error.message));

        if let Some(span) = &self.error.context.span {
            if let Some(snippet) = self.extract_snippet(span) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let note_label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn paint(&self, text: String, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text.as_str()).to_string()
        } else {
            text
        }
    }

    fn extract_snippet(&self, span: &Span) -> Option<String> {
        let lines: Vec<&str> = self.source.lines().collect();

        if span.start.line == 0 || span.start.line > lines.len() {
            return None;
        }

        let line = lines[span.start.line - 1];
        let line_num = span.start.line.to_string();
        let gutter_width = line_num.len() + 2;

        let mut snippet = format!(
            "{} {} {}\n",
            self.paint(line_num, |s| s.blue().bold()),
            self.paint("|".to_string(), |s| s.blue()),
            line
        );

        let pointer_length = if span.start.line == span.end.line {
            span.end.column.saturating_sub(span.start.column).max(1)
        } else {
            1
        };

        snippet.push_str(&format!(
            "{} {} {}{}",
            " ".repeat(gutter_width - 2),
            self.paint("|".to_string(), |s| s.blue()),
            " ".repeat(span.start.column.saturating_sub(1)),
            self.paint("^".repeat(pointer_length), |s| s.red().bold())
        ));

        Some(snippet)
    }
}

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Collection of errors for reporting multiple issues
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<DescriptorError>,
    warnings: Vec<DescriptorError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: DescriptorError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: DescriptorError) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn errors(&self) -> &[DescriptorError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[DescriptorError] {
        &self.warnings
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }

        if !self.is_empty() {
            write!(
                f,
                "\n{} error(s), {} warning(s)",
                self.error_count(),
                self.warning_count()
            )?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorCollection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_span() {
        let error = DescriptorError::empty_name("property");
        assert_eq!(error.to_string(), "empty name: property name must not be empty");
    }

    #[test]
    fn test_display_with_span_note_and_help() {
        let error = DescriptorError::new(ErrorKind::InvalidName, "bad")
            .with_span(Span::single(SourceLocation::new(3, 7)))
            .with_note("n")
            .with_help("h");
        assert_eq!(error.to_string(), "3:7: invalid name: bad\nnote: n\nhelp: h");
    }

    #[test]
    fn test_span_range_display() {
        let span = Span::new(SourceLocation::new(1, 2), SourceLocation::new(1, 5));
        assert_eq!(span.to_string(), "1:2-1:5");
    }
}
