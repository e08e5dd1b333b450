//! Test doubles for the DeShare client: mockall mocks of the contract and
//! wallet traits, and a display surface that records what it was told.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

/// Mock objects for testing
pub mod mocks;

/// Helpers for building pending transactions and outcomes
pub mod test_utils;
