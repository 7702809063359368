#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MicroError {
    #[error("{what} must be non-negative, got {value}")]
    NegativeInput { what: &'static str, value: i64 },
}

pub(crate) fn non_negative(what: &'static str, value: i64) -> Result<u64, MicroError> {
    u64::try_from(value).map_err(|_| MicroError::NegativeInput { what, value })
}
