//! The typed value produced and consumed by the codec.

use crate::{error::TypeError, ty::AbiType};
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, B256, I256, U256};

/// A value conforming to an [`AbiType`], ready for binary encoding or
/// produced by binary decoding.
///
/// Containers are a single [`Array`](Self::Array) variant; whether it stands
/// for a `T[]` or a `T[N]` is decided by the descriptor it is used with.
/// Fixed byte arrays are stored at their declared length, right-aligned and
/// zero-padded exactly as they were parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    /// A signed integer and its declared bit width.
    Int(I256, usize),
    /// An unsigned integer and its declared bit width.
    Uint(U256, usize),
    /// A boolean.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values of one element type.
    Array(Vec<AbiValue>),
    /// A 20-byte address.
    Address(Address),
    /// A byte sequence of statically declared length in [1, 32].
    FixedBytes(Vec<u8>),
    /// A variable-length byte sequence.
    Bytes(Vec<u8>),
    /// A 32-byte hash.
    Hash(B256),
}

impl AbiValue {
    /// Constructs the zero/empty value of the given descriptor.
    ///
    /// This is what the unpacker allocates result destinations from. Fails
    /// for [`AbiType::FixedPoint`] and [`AbiType::Function`], which have no
    /// value representation.
    pub fn default_of(ty: &AbiType) -> Result<Self, TypeError> {
        match ty {
            AbiType::Int(width) => Ok(Self::Int(I256::ZERO, *width)),
            AbiType::Uint(width) => Ok(Self::Uint(U256::ZERO, *width)),
            AbiType::Bool => Ok(Self::Bool(false)),
            AbiType::String => Ok(Self::String(String::new())),
            AbiType::Slice(_) => Ok(Self::Array(Vec::new())),
            AbiType::Array(element, len) => {
                Ok(Self::Array(vec![Self::default_of(element)?; *len]))
            }
            AbiType::Address => Ok(Self::Address(Address::ZERO)),
            AbiType::FixedBytes(size) => Ok(Self::FixedBytes(vec![0; *size])),
            AbiType::Bytes => Ok(Self::Bytes(Vec::new())),
            AbiType::Hash => Ok(Self::Hash(B256::ZERO)),
            AbiType::FixedPoint | AbiType::Function => Err(TypeError::Unhandled(ty.clone())),
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(..) => "int",
            Self::Uint(..) => "uint",
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Address(_) => "address",
            Self::FixedBytes(_) => "fixed bytes",
            Self::Bytes(_) => "bytes",
            Self::Hash(_) => "hash",
        }
    }
}

impl TryFrom<DynSolValue> for AbiValue {
    type Error = TypeError;

    fn try_from(value: DynSolValue) -> Result<Self, TypeError> {
        match value {
            DynSolValue::Int(value, width) => Ok(Self::Int(value, width)),
            DynSolValue::Uint(value, width) => Ok(Self::Uint(value, width)),
            DynSolValue::Bool(value) => Ok(Self::Bool(value)),
            DynSolValue::String(value) => Ok(Self::String(value)),
            DynSolValue::Array(values) | DynSolValue::FixedArray(values) => Ok(Self::Array(
                values.into_iter().map(Self::try_from).collect::<Result<_, _>>()?,
            )),
            DynSolValue::Address(value) => Ok(Self::Address(value)),
            DynSolValue::FixedBytes(word, size) => Ok(Self::FixedBytes(word[..size].to_vec())),
            DynSolValue::Bytes(value) => Ok(Self::Bytes(value)),
            value => Err(TypeError::Unknown(
                value.sol_type_name().map(Into::into).unwrap_or_default(),
            )),
        }
    }
}

impl From<&AbiValue> for DynSolValue {
    fn from(value: &AbiValue) -> Self {
        match value {
            AbiValue::Int(value, width) => Self::Int(*value, *width),
            AbiValue::Uint(value, width) => Self::Uint(*value, *width),
            AbiValue::Bool(value) => Self::Bool(*value),
            AbiValue::String(value) => Self::String(value.clone()),
            AbiValue::Array(values) => Self::Array(values.iter().map(Self::from).collect()),
            AbiValue::Address(value) => Self::Address(*value),
            AbiValue::FixedBytes(bytes) => {
                let mut word = B256::ZERO;
                word[..bytes.len()].copy_from_slice(bytes);
                Self::FixedBytes(word, bytes.len())
            }
            AbiValue::Bytes(bytes) => Self::Bytes(bytes.clone()),
            AbiValue::Hash(hash) => Self::FixedBytes(*hash, 32),
        }
    }
}
