//! Errors reported by the drivers.
//!
//! The builders themselves cannot fail: their invariants hold by
//! construction.
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The driver expects exactly one positional argument.
    #[error("expected exactly one argument, found {found}")]
    InvalidArgumentCount { found: usize },

    /// The size argument is not a non-negative integer.
    #[error("invalid size `{value}`")]
    InvalidArgumentFormat { value: String },

    /// An environment setting could not be parsed.
    #[error("invalid value `{value}` for {var}")]
    InvalidConfig { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for the error. A wrong argument count only prints
    /// the usage line and exits normally.
    ///
    /// # Example
    /// ```
    /// use divconq::Error;
    ///
    /// assert_eq!(Error::InvalidArgumentCount { found: 0 }.exit_code(), 0);
    /// assert_eq!(Error::InvalidArgumentFormat { value: "x".into() }.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgumentCount { .. } => 0,
            Error::InvalidArgumentFormat { .. } | Error::InvalidConfig { .. } => 1,
        }
    }
}
