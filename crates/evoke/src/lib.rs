//! Direct contract calls driven by an ABI document.
//!
//! The library half of evoke: [`Connection`] wraps an optional RPC provider
//! together with the lazily cached base fee, and [`parse_wei_value`] turns
//! human gas-price strings into wei.

#[macro_use]
extern crate tracing;

mod connection;
mod utils;

pub use connection::Connection;
pub use utils::parse_wei_value;
