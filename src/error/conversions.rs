//! Conversions from foreign error types into DescriptorError

use super::{DescriptorError, ErrorKind, SourceLocation, Span};

impl From<std::io::Error> for DescriptorError {
    fn from(err: std::io::Error) -> Self {
        DescriptorError::new(ErrorKind::IoError, err.to_string())
    }
}

/// Syntax and data errors keep the line/column serde_json reports so the
/// formatter can point into the definition file.
impl From<serde_json::Error> for DescriptorError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ErrorKind::IoError
        } else if err.is_syntax() || err.is_data() || err.is_eof() {
            ErrorKind::ParseError
        } else {
            ErrorKind::SerializationError
        };

        let line = err.line();
        let column = err.column();
        let message = strip_position_suffix(&err.to_string());

        let error = DescriptorError::new(kind, message);
        if line == 0 {
            error
        } else {
            error.with_span(Span::single(SourceLocation::new(line, column)))
        }
    }
}

/// serde_json appends " at line L column C" to its messages; the span carries that now.
fn strip_position_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message.to_string(),
    }
}
