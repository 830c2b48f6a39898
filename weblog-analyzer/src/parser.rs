use crate::models::Record;

const DELIMITER: char = ',';

/// Parses comma-delimited rows into records. Every row is data; there is no
/// header. Blank lines at the end of the text produce nothing, while a blank
/// line anywhere else becomes a record with no fields.
pub fn parse_records(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let len = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);
    lines[..len].iter().map(|line| parse_line(line)).collect()
}

fn parse_line(line: &str) -> Record {
    if line.is_empty() {
        return Record::default();
    }
    Record::from_fields(line.split(DELIMITER))
}
