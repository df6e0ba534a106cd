//! Error type shared by both containers.

use thiserror::Error;

/// Result alias for fallible container operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Caller-input errors. Both are raised synchronously and leave the
/// container (if any) untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A constructor argument is below its allowed minimum. No container
    /// is created.
    #[error("invalid argument `{name}`: got {value}, expected at least {min}")]
    InvalidArgument {
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// Indexed access outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub(crate) fn check_at_least(name: &'static str, value: usize, min: usize) -> Result<()> {
        if value < min {
            Err(Error::InvalidArgument { name, value, min })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_at_least_boundaries() {
        assert_eq!(Error::check_at_least("growth_factor", 2, 2), Ok(()));
        assert_eq!(
            Error::check_at_least("growth_factor", 1, 2),
            Err(Error::InvalidArgument {
                name: "growth_factor",
                value: 1,
                min: 2
            })
        );
    }

    #[test]
    fn messages_carry_context() {
        let e = Error::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(e.to_string(), "index 3 out of range for length 1");
        let e = Error::InvalidArgument {
            name: "capacity",
            value: 1,
            min: 2,
        };
        assert_eq!(
            e.to_string(),
            "invalid argument `capacity`: got 1, expected at least 2"
        );
    }
}
