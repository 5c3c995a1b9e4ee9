pub mod category;
pub mod image;
pub mod link;
pub mod word;

/// Generate an identifier for a newly created record.
///
/// Records imported from older backups keep their own ids (often
/// millisecond timestamps), so ids are plain strings rather than `Uuid`.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
