use clap::ValueEnum;
use num_format::{Locale, ToFormattedString};

use crate::analytics::Report;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn render_text(report: &Report) -> String {
    let images = report.image_count.to_formatted_string(&Locale::en);
    let total = report.total_requests.to_formatted_string(&Locale::en);
    let share = match report.image_percentage {
        Some(pct) => format!("Image request account for {pct:.2}% of all requests in data."),
        None => "Image request share unavailable: no records in data.".to_string(),
    };
    format!(
        "Found {images} images out of {total} total.\n{share}\nMost used browser was {}.",
        report.most_used_browser
    )
}
