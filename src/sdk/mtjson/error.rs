use thiserror::Error;

#[derive(Debug, Error)]
pub enum MtJsonError {
    /// The input text was not valid JSON at all. No partial result exists.
    #[error("malformed MTJSON document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field that must be iterated as a sequence held a non-array value.
    /// Aborts the whole read; wrong-typed scalar fields are skipped instead.
    #[error("expected {expected} for {context}, found {found}")]
    UnexpectedShape {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
