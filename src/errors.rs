use thiserror::Error;

/// Error type that captures ledger contract violations.
///
/// Business-rule rejections (an expense exceeding the balance) are not
/// errors; they surface as a `false` append outcome instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("non-finite amount: {0}")]
    NonFiniteAmount(f64),
}
