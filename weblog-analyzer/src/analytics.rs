use serde::Serialize;
use tracing::debug;

use crate::{
    browser::{Browser, BrowserTally},
    classifier::{IMAGE_EXTENSIONS, count_images, image_percentage},
    parser::parse_records,
};

/// Summary of one batch of access-log text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_requests: usize,
    pub image_count: usize,
    /// `None` when the batch held no records.
    pub image_percentage: Option<f64>,
    pub most_used_browser: Browser,
    pub browser_tally: BrowserTally,
}

pub fn analyze(text: &str) -> Report {
    let records = parse_records(text);
    let total_requests = records.len();
    let image_count = count_images(&records, &IMAGE_EXTENSIONS);
    let image_percentage =
        (total_requests > 0).then(|| image_percentage(image_count, total_requests));
    let browser_tally = BrowserTally::from_records(&records);
    let most_used_browser = browser_tally.most_used();
    debug!(
        total_requests,
        image_count,
        matched_browsers = browser_tally.matched(),
        %most_used_browser,
        "analyzed batch"
    );
    Report {
        total_requests,
        image_count,
        image_percentage,
        most_used_browser,
        browser_tally,
    }
}
