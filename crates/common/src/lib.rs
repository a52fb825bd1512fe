//! Shared helpers for evoke's commands: contract loading, provider
//! construction and file system utilities.

#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
extern crate tracing;

pub mod contracts;
pub mod fs;
pub mod provider;

pub use contracts::ContractData;
pub use provider::try_get_provider;
