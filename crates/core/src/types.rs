/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Identifiers are 128 bits wide.
pub const ID_LEN: usize = 16;
