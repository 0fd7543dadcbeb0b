use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("patient age {0} months is outside the 0-72 month range")]
    AgeOutOfRange(u32),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("milestone '{0}' already has a recorded outcome in this session")]
    DuplicateResult(String),
}
