//! Typed conversion between strings and contract ABI values.
//!
//! Everything here is driven by [`AbiType`], a closed descriptor of one ABI
//! type: [`parse_value`] turns a user-supplied string into an [`AbiValue`]
//! ready for binary encoding, [`format_value`] renders a decoded value back
//! into its canonical string form, and [`unpack_result`] turns a raw call
//! result into one typed value per declared output. Binary encoding and
//! decoding themselves are delegated to [`alloy_dyn_abi`].

#![warn(missing_docs, unused_crate_dependencies)]

mod error;
mod fmt;
mod parse;
mod ty;
mod unpack;
mod value;

pub use error::{FormatError, ParseError, TypeError, UnpackError};
pub use fmt::format_value;
pub use parse::{encode_function_args, parse_value};
pub use ty::AbiType;
pub use unpack::{unpack_outputs, unpack_result};
pub use value::AbiValue;
