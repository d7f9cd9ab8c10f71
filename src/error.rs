use ca_rules::ParseRuleError;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid rule.
    #[error("Invalid rule: {0:?}.")]
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules would fill the whole unbounded plane.
    #[error("B0 rules are not supported on a sparse plane.")]
    B0Error,
}
