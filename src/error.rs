use thiserror::Error;

/// Convenience alias for results produced by [`Balancer`](crate::Balancer) operations.
pub type BalanceResult<T> = Result<T, BalanceError>;

/// Contract violations detected before a subtree is restructured.
///
/// When one of these is returned the caller's slot still owns the subtree
/// exactly as it was handed in, apart from the root's refreshed height.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("cannot balance an absent node")]
    AbsentNode,

    #[error("balance factor {factor} is outside -2..=2 and cannot be repaired by a single rotation step")]
    ExcessiveImbalance { factor: isize },
}
