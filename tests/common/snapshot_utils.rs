//! Utilities for snapshot testing with insta

use insta::Settings;
use smo_descriptors::error::{DescriptorError, ErrorFormatter};

/// Configure insta settings for consistent snapshots
pub fn with_settings<F>(f: F)
where
    F: FnOnce(),
{
    let mut settings = Settings::clone_current();
    settings.set_prepend_module_to_snapshot(false);
    settings.set_omit_expression(true);
    settings.bind(f);
}

/// Descriptor JSON as the CLI writes it
pub fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("descriptors always serialize")
}

/// Formatted error without color codes, pointing into `source`
pub fn plain_error(error: &DescriptorError, source: &str, filename: &str) -> String {
    ErrorFormatter::new(error, source)
        .with_filename(filename)
        .with_color(false)
        .format()
}
