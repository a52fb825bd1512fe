//! Error types returned by the codec.

use crate::ty::AbiType;
use alloy_primitives::hex;

/// Errors constructing an [`AbiType`](crate::AbiType) descriptor.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A type outside the closed descriptor set, e.g. a tuple.
    #[error("unknown type {0}")]
    Unknown(String),
    /// A type that exists in the descriptor set but has no value
    /// representation.
    #[error("unhandled type {0}")]
    Unhandled(AbiType),
    /// The type string could not be parsed at all.
    #[error(transparent)]
    Invalid(#[from] alloy_dyn_abi::Error),
}

/// Errors parsing a string into a typed value.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The string is not a valid base-10 integer.
    #[error("bad integer {0}")]
    NotAnInteger(String),
    /// The string is not valid hex.
    #[error(transparent)]
    BadHex(#[from] hex::FromHexError),
    /// A byte length outside what the type can hold.
    #[error("invalid byte size {0}")]
    InvalidSize(usize),
    /// A type that cannot be parsed from a string.
    #[error("unhandled type {0}")]
    Unhandled(AbiType),
    /// A type outside the closed descriptor set.
    #[error("unknown type {0}")]
    Unknown(String),
    /// The external ABI coder rejected the type or value.
    #[error(transparent)]
    Abi(#[from] alloy_dyn_abi::Error),
}

impl From<TypeError> for ParseError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::Unknown(ty) => Self::Unknown(ty),
            TypeError::Unhandled(ty) => Self::Unhandled(ty),
            TypeError::Invalid(err) => Self::Abi(err),
        }
    }
}

/// Errors rendering a typed value back into a string.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A type that cannot be rendered.
    #[error("unhandled type {0}")]
    Unhandled(AbiType),
    /// The value does not have the shape the descriptor demands.
    #[error("{found} value does not match type {ty}")]
    Mismatch {
        /// The descriptor the value was rendered against.
        ty: AbiType,
        /// Shape of the value actually supplied.
        found: &'static str,
    },
}

/// Errors unpacking a raw call result into typed values.
#[derive(Debug, thiserror::Error)]
pub enum UnpackError {
    /// The method is not present in the ABI document.
    #[error("the method {0} does not exist")]
    NoSuchMethod(String),
    /// The external decoder rejected the result bytes.
    #[error("failed to decode output of {method}: {source}")]
    DecodeFailed {
        /// Name of the method whose output was being decoded.
        method: String,
        /// The decoder's error.
        source: alloy_dyn_abi::Error,
    },
    /// An output type could not be described or constructed.
    #[error(transparent)]
    Type(#[from] TypeError),
}
