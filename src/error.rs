use thiserror::Error;

/// Convenience result type for numeric operations.
pub type NumericResult<T> = Result<T, NumericError>;

/// Error type for fatal arithmetic failures.
///
/// There is no recovery path: callers propagate these to the process
/// boundary, where they terminate the run with a diagnostic and a non-zero
/// exit status.
#[derive(Debug, Error)]
pub enum NumericError {
    /// Checked integer arithmetic overflowed.
    #[error("integer overflow computing {lhs} {op} {rhs}")]
    Overflow {
        op: &'static str,
        lhs: i64,
        rhs: i64,
    },

    /// `abs` overflowed (only possible for `i64::MIN`).
    #[error("integer overflow computing abs({value})")]
    AbsOverflow { value: i64 },
}
