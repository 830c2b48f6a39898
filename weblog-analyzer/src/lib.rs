pub mod analytics;
pub mod browser;
pub mod classifier;
pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod render;

pub use analytics::{Report, analyze};
pub use browser::{Browser, BrowserTally};
pub use models::Record;
pub use parser::parse_records;
