use std::any::Any;
use std::error::Error as StdError;
use std::fmt::{Debug, Display, Formatter};

use ethers_contract::ContractError;
use ethers_providers::{Middleware, ProviderError};

use crate::H256;

/// The result of interacting with a chain.
pub type ChainResult<T> = Result<T, ChainCommunicationError>;

/// An "Any"-typed error.
pub trait DeshareCustomError: StdError + Send + Sync + Any {}

impl<E: StdError + Send + Sync + Any> DeshareCustomError for E {}

/// Thin wrapper around a boxed DeshareCustomError; a trait-object adaptor so
/// errors from any middleware can share one variant.
#[repr(transparent)]
pub struct DeshareCustomErrorWrapper(Box<dyn DeshareCustomError>);

impl Debug for DeshareCustomErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", AsRef::<dyn DeshareCustomError>::as_ref(&self))
    }
}

impl Display for DeshareCustomErrorWrapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", AsRef::<dyn DeshareCustomError>::as_ref(&self))
    }
}

impl StdError for DeshareCustomErrorWrapper {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl AsRef<dyn DeshareCustomError> for DeshareCustomErrorWrapper {
    fn as_ref(&self) -> &dyn DeshareCustomError {
        self.0.as_ref()
    }
}

/// ChainCommunicationError contains errors returned when attempting to
/// call a contract or dispatch a transaction
#[derive(Debug, thiserror::Error)]
pub enum ChainCommunicationError {
    /// An error with a contract call
    #[error(transparent)]
    ContractError(DeshareCustomErrorWrapper),
    /// Provider Error
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// A transaction was dropped from the mempool
    #[error("Transaction dropped from mempool {0:?}")]
    TransactionDropped(H256),
    /// Any other error; does not implement `From` to prevent
    /// conflicting/absorbing other errors.
    #[error(transparent)]
    Other(DeshareCustomErrorWrapper),
    /// Waiting for a transaction receipt timed out
    #[error("Transaction confirmation timed out")]
    TransactionTimeout(),
}

#[derive(Debug)]
#[repr(transparent)]
struct StringError(&'static str);

impl Display for StringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for StringError {}

impl ChainCommunicationError {
    /// Create a chain communication error from any other existing error
    pub fn from_other<E: DeshareCustomError>(err: E) -> Self {
        Self::Other(DeshareCustomErrorWrapper(Box::new(err)))
    }

    /// Creates a chain communication error of the other error variant from a static string
    pub fn from_other_str(err: &'static str) -> Self {
        Self::from_other(StringError(err))
    }

    /// Creates a chain communication error of the contract error variant from any other existing
    /// error
    pub fn from_contract_error<E>(err: E) -> Self
    where
        E: DeshareCustomError,
    {
        Self::ContractError(DeshareCustomErrorWrapper(Box::new(err)))
    }

    /// Creates a chain communication error of the contract error variant from a static string
    pub fn from_contract_error_str(err: &'static str) -> Self {
        Self::from_contract_error(StringError(err))
    }
}

impl<M> From<ContractError<M>> for ChainCommunicationError
where
    M: Middleware + 'static,
{
    fn from(e: ContractError<M>) -> Self {
        Self::ContractError(DeshareCustomErrorWrapper(Box::new(e)))
    }
}
