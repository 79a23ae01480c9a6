/// One structured log entry.
///
/// `level` always holds the normalized (upper-cased) spelling; the record
/// itself does not know whether that level is one we accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: String,
    pub service: String,
    pub message: String,
}

impl LogRecord {
    /// Re-serializes the record in the canonical pipe format used by the
    /// cleaned log: `timestamp | LEVEL | service | message`.
    pub fn to_clean_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp, self.level, self.service, self.message
        )
    }
}
