use crate::address::AddressError;
use jetton_minter::MinterError;
use soroban_sdk::InvokeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Total amount {total} should be >= forward amount {forward}")]
    ForwardExceedsTotal { forward: i128, total: i128 },

    #[error("Minter rejected the request: {0:?}")]
    Contract(MinterError),

    #[error("Invocation aborted: {0}")]
    Invoke(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Wallet template hash mismatch: computed {computed}, host reported {reported}")]
    TemplateMismatch { computed: String, reported: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Exit code reported by the contract, when the failure came from one.
    pub fn exit_code(&self) -> Option<u32> {
        match self {
            Self::Contract(e) => Some(*e as u32),
            _ => None,
        }
    }

    /// Fatal failures can never succeed on retry.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Contract(MinterError::CappedSupplyExceeded))
    }
}

/// Flatten the nested result of a generated `try_*` client call.
pub(crate) fn flatten_minter<T, C: std::fmt::Debug>(
    result: Result<Result<T, C>, Result<MinterError, InvokeError>>,
) -> Result<T, ClientError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(ClientError::Invoke(format!(
            "unexpected return value: {:?}",
            conversion
        ))),
        Err(Ok(e)) => Err(ClientError::Contract(e)),
        Err(Err(invoke)) => Err(ClientError::Invoke(format!("{:?}", invoke))),
    }
}

/// Same as [`flatten_minter`] for calls whose failures are plain host errors.
pub(crate) fn flatten_host<T, C: std::fmt::Debug, E: std::fmt::Debug>(
    result: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, ClientError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(ClientError::Invoke(format!(
            "unexpected return value: {:?}",
            conversion
        ))),
        Err(Ok(e)) => Err(ClientError::Invoke(format!("{:?}", e))),
        Err(Err(invoke)) => Err(ClientError::Invoke(format!("{:?}", invoke))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_is_fatal() {
        let err = ClientError::Contract(MinterError::CappedSupplyExceeded);
        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), Some(256));
        assert!(err.to_string().contains("CappedSupplyExceeded"));
    }

    #[test]
    fn test_validation_errors_are_not_fatal() {
        let local = ClientError::ForwardExceedsTotal {
            forward: 10,
            total: 5,
        };
        assert!(!local.is_fatal());
        assert_eq!(local.exit_code(), None);

        let remote = ClientError::Contract(MinterError::ForwardExceedsPayment);
        assert!(!remote.is_fatal());
        assert_eq!(remote.exit_code(), Some(3));

        let auth = ClientError::Contract(MinterError::Unauthorized);
        assert!(!auth.is_fatal());
        assert_eq!(auth.exit_code(), Some(73));
    }

    #[test]
    fn test_flatten_minter_results() {
        let ok: Result<Result<i128, ()>, Result<MinterError, InvokeError>> = Ok(Ok(5));
        assert_eq!(flatten_minter(ok).unwrap(), 5);

        let contract: Result<Result<i128, ()>, Result<MinterError, InvokeError>> =
            Err(Ok(MinterError::InsufficientPayment));
        assert!(matches!(
            flatten_minter(contract),
            Err(ClientError::Contract(MinterError::InsufficientPayment))
        ));

        let aborted: Result<Result<i128, ()>, Result<MinterError, InvokeError>> =
            Err(Err(InvokeError::Abort));
        assert!(matches!(flatten_minter(aborted), Err(ClientError::Invoke(_))));
    }
}
