use thiserror::Error;

/// An error returned by a host function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// There's no connection on the given server tab.
    #[error("Not connected to a server")]
    NotConnected,
    /// The host function returned a non-zero error code.
    #[error("Host call {function} failed with error code {code:#06x}")]
    Call {
        /// Name of the host function that failed.
        function: &'static str,
        /// The error code returned by the host.
        code: u32,
    },
}

impl HostError {
    /// Converts a raw host return code into a result, where `0` is success.
    pub fn check(function: &'static str, code: u32) -> Result<(), HostError> {
        match code {
            0 => Ok(()),
            code => Err(HostError::Call { function, code }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_zero() {
        assert_eq!(HostError::check("flushClientSelfUpdates", 0), Ok(()));
    }

    #[test]
    fn check_wraps_error_code() {
        let err = HostError::check("setClientSelfVariableAsString", 0x0200).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Host call setClientSelfVariableAsString failed with error code 0x0200"
        );
    }
}
