use crate::models::Record;

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "gif", "png"];

/// True when `path` ends in `.` plus one of `extensions`, ignoring ASCII case.
pub fn has_extension(path: &str, extensions: &[&str]) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

pub fn count_images(records: &[Record], extensions: &[&str]) -> usize {
    records
        .iter()
        .filter_map(|record| record.path.as_deref())
        .filter(|path| has_extension(path, extensions))
        .count()
}

/// Share of `total` taken by `image_count`, in percent.
///
/// `total` must be non-zero; a zero total yields a non-finite value, so check
/// for an empty batch before calling this.
pub fn image_percentage(image_count: usize, total: usize) -> f64 {
    (image_count as f64 / total as f64) * 100.0
}
