//! # Record Codecs
//!
//! Containers never format or parse text themselves. They hand each record to a codec,
//! one record per line, so the on-disk layout can change without touching container code.
//!
//! - [`RecordEncoder`]: record → single line (no trailing newline)
//! - [`RecordDecoder`]: single line → record

/// Errors raised while turning a line into a record.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum CodecError {
    /// The line ended before the named field.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A numeric field did not parse.
    #[error("invalid number in field `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A structured (JSON) line was rejected or could not be produced.
    #[error("invalid JSON record: {0}")]
    Json(String),
}

/// Writes one record as one line of text.
pub trait RecordEncoder {
    type Record;

    fn encode(&self, record: &Self::Record) -> Result<String, CodecError>;
}

/// Reads one record back from one line of text.
pub trait RecordDecoder {
    type Record;

    fn decode(&self, line: &str) -> Result<Self::Record, CodecError>;
}
