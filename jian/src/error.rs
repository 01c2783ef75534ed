//! Error handling for the `jian` CLI.
//!
//! Host-level failures only — a program's own runtime errors are printed
//! as ordinary interpreted output (§7) and never reach this type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JianError {
    #[error(transparent)]
    Driver(#[from] jianc_drv::DriverError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JianError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let jian_err: JianError = io_err.into();
        assert!(matches!(jian_err, JianError::Io(_)));
    }
}
