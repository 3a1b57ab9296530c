//! Error types for computus-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Caller precondition
//! violations (a year outside the supported range, an impossible day of the
//! month) are reported through the `ensure!` and `fail!` convenience macros so
//! that they are rejected at the API boundary rather than deep inside the
//! date arithmetic.

use thiserror::Error;

/// The top-level error type used throughout computus-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error: an invalid calendar triple or a result outside
    /// the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A holiday table could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout computus-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with [`Error::Precondition`] when `$cond` is false.
///
/// # Example
/// ```
/// use computus_core::{ensure, errors::Error};
/// fn positive(x: i64) -> computus_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return early with [`Error::Runtime`].
///
/// # Example
/// ```
/// use computus_core::{fail, errors::Error};
/// fn always_err() -> computus_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
