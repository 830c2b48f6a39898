use derive_more::Display;
use serde::{Serialize, Serializer};

use crate::models::Record;

const BROWSER_COUNT: usize = 4;

/// Browsers recognised in the `browser` column. Declaration order is match
/// priority and tie-break order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Browser {
    Firefox,
    Chrome,
    #[display("Internet Explorer")]
    #[serde(rename = "Internet Explorer")]
    InternetExplorer,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; BROWSER_COUNT] = [
        Self::Firefox,
        Self::Chrome,
        Self::InternetExplorer,
        Self::Safari,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
            Self::InternetExplorer => "Internet Explorer",
            Self::Safari => "Safari",
        }
    }

    /// First browser in [`Browser::ALL`] whose token occurs anywhere in
    /// `agent`. A string naming both Chrome and Safari is Chrome regardless
    /// of which comes first in the text.
    pub fn detect(agent: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| agent.contains(b.token()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-browser request counts, kept in [`Browser::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTally([usize; BROWSER_COUNT]);

impl BrowserTally {
    pub fn from_records(records: &[Record]) -> Self {
        let mut tally = Self::default();
        for browser in records
            .iter()
            .filter_map(|r| r.browser.as_deref())
            .filter_map(Browser::detect)
        {
            tally.record(browser);
        }
        tally
    }

    pub fn record(&mut self, browser: Browser) {
        self.0[browser.index()] += 1;
    }

    pub fn count(&self, browser: Browser) -> usize {
        self.0[browser.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Browser, usize)> + '_ {
        Browser::ALL.into_iter().map(|b| (b, self.count(b)))
    }

    pub fn matched(&self) -> usize {
        self.0.iter().sum()
    }

    /// Browser with the highest count; ties go to the one listed first, so an
    /// empty tally answers [`Browser::Firefox`].
    pub fn most_used(&self) -> Browser {
        let mut best = Browser::ALL[0];
        for (browser, count) in self.iter() {
            if count > self.count(best) {
                best = browser;
            }
        }
        best
    }
}

impl Serialize for BrowserTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(b, count)| (b.token(), count)))
    }
}
