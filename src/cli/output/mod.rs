pub mod json;
pub mod text;

use crate::cli::OutputFormat;
use crate::error::HelpError;
use crate::types::Outline;

pub fn render_query(result: &Result<String, HelpError>, keyword: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => text::render_query(result),
        OutputFormat::Json => json::render_query(result, keyword),
    }
}

pub fn render_check(result: &Result<Outline, HelpError>, file: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => text::render_check(result, file),
        OutputFormat::Json => json::render_check(result, file),
    }
}
