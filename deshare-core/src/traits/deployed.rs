use std::fmt;

use crate::{ContractHandle, H160};

/// Interface for a deployed contract.
/// This trait is intended to expose attributes of any contract, and
/// should not consider the purpose or implementation details of the contract.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait DeshareContract {
    /// Return the address and interface this proxy was built for.
    fn handle(&self) -> ContractHandle;

    /// Return the address of this contract.
    fn address(&self) -> H160 {
        self.handle().address
    }
}

impl fmt::Debug for dyn DeshareContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeshareContract({:?})", self.address())
    }
}
