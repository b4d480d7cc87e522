/// Database primary keys for users, steps, and other serial-keyed rows.
///
/// Tours and recordings use `uuid::Uuid` primary keys instead; they are
/// externally visible identifiers and must not be guessable sequences.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
