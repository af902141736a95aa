use thiserror::Error;

/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Errors raised while building a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// One or more field values failed validation
    #[error("Invalid data: {}", join_violations(.0))]
    InvalidData(Vec<FieldViolation>),

    /// The `type` tag names no known kind
    #[error("Unknown media kind: '{0}'")]
    UnknownKind(String),

    /// A structured record is missing a field or carries the wrong type
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl RecordError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    /// Names of the offending fields, for `InvalidData`. Empty otherwise.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidData(violations) => violations.iter().map(|v| v.field).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
