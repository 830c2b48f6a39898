use chrono::{NaiveDateTime, TimeDelta};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 3] = [("GET", 8), ("POST", 1), ("HEAD", 1)];
const PATHS: [(&str, u8); 10] = [
    ("/", 10),
    ("/index.html", 20),
    ("/about.html", 5),
    ("/css/site.css", 10),
    ("/js/app.js", 10),
    ("/images/logo.png", 20),
    ("/images/banner.JPG", 10),
    ("/images/spinner.gif", 5),
    ("/photos/2014/beach.jpg", 8),
    ("/downloads/report.pdf", 2),
];
// No commas: the log format has no quoting.
const AGENTS: [(&str, u8); 6] = [
    (
        "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:27.0) Gecko/20100101 Firefox/27.0",
        30,
    ),
    (
        "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML like Gecko) Chrome/32.0.1700.76 Safari/537.36",
        40,
    ),
    (
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0) Internet Explorer",
        10,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_1) AppleWebKit/537.73.11 (KHTML like Gecko) Version/7.0.1 Safari/537.73.11",
        15,
    ),
    ("Opera/9.80 (Windows NT 6.1) Presto/2.12.388 Version/12.16", 3),
    ("curl/7.35.0", 2),
];
const MAX_STEP_SECS: i64 = 5;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, table: &[(T, u8)]) -> T {
    table
        .choose_weighted(rng, |(_, w)| *w)
        .map(|(v, _)| *v)
        .expect("weighted tables are non-empty")
}

/// Produces rows of `path,datetime_accessed,browser,request,size` with
/// timestamps that move forward from `start`.
pub struct RowGenerator {
    clock: NaiveDateTime,
    short_row_percent: u8,
}

impl RowGenerator {
    pub fn new(start: NaiveDateTime, short_row_percent: u8) -> Self {
        Self {
            clock: start,
            short_row_percent: short_row_percent.min(100),
        }
    }

    pub fn next_row<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        self.clock += TimeDelta::seconds(rng.random_range(0..=MAX_STEP_SECS));
        let timestamp = self.clock.format(TIMESTAMP_FORMAT);
        let path = pick(rng, &PATHS);
        let agent = pick(rng, &AGENTS);
        if rng.random_ratio(u32::from(self.short_row_percent), 100) {
            return format!("{path},{timestamp},{agent}");
        }
        let method = pick(rng, &METHODS);
        let size = rng.random_range(100..5000);
        format!("{path},{timestamp},{agent},{method} {path},{size}")
    }
}
