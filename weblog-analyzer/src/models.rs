use serde::Serialize;

/// Column names in the order they appear in each row.
pub const FIELD_NAMES: [&str; 5] = ["path", "datetime_accessed", "browser", "request", "size"];

/// One row of the access log. Columns are assigned by position, so a short
/// row leaves its trailing fields as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub path: Option<String>,
    pub datetime_accessed: Option<String>,
    pub browser: Option<String>,
    pub request: Option<String>,
    pub size: Option<String>,
}

impl Record {
    /// Pairs `fields` with [`FIELD_NAMES`] by position. Values past the fifth
    /// are dropped.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut record = Self::default();
        let slots: [&mut Option<String>; FIELD_NAMES.len()] = [
            &mut record.path,
            &mut record.datetime_accessed,
            &mut record.browser,
            &mut record.request,
            &mut record.size,
        ];
        for (slot, value) in slots.into_iter().zip(fields) {
            *slot = Some(value.to_string());
        }
        record
    }

    /// Present fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        let columns: [&Option<String>; FIELD_NAMES.len()] = [
            &self.path,
            &self.datetime_accessed,
            &self.browser,
            &self.request,
            &self.size,
        ];
        columns.into_iter().map_while(|field| field.as_deref())
    }
}
