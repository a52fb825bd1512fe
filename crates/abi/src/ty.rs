//! The type descriptor driving the codec.

use crate::error::TypeError;
use alloy_dyn_abi::DynSolType;
use std::fmt;

/// Description of a single ABI type.
///
/// The set of kinds is closed: everything a contract interface can declare
/// maps onto exactly one variant, and the width/size/element metadata lives
/// in the variant payloads. [`Hash`](Self::Hash) never appears in Solidity
/// type strings but can be constructed directly; [`FixedPoint`](Self::FixedPoint)
/// and [`Function`](Self::Function) are recognized but have no value
/// representation, so every conversion against them fails predictably.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiType {
    /// `intN`, with the bit width.
    Int(usize),
    /// `uintN`, with the bit width.
    Uint(usize),
    /// `bool`.
    Bool,
    /// `string`.
    String,
    /// `T[]`, a dynamically sized array.
    Slice(Box<AbiType>),
    /// `T[N]`, a statically sized array.
    Array(Box<AbiType>, usize),
    /// `address`.
    Address,
    /// `bytesN`, with the byte length in [1, 32].
    FixedBytes(usize),
    /// `bytes`.
    Bytes,
    /// A 32-byte hash.
    Hash,
    /// `fixed`/`ufixed`. No value representation.
    FixedPoint,
    /// An external function pointer. No value representation.
    Function,
}

impl AbiType {
    /// Parses a Solidity type string like `uint8` or `bytes4[2]`.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        Self::try_from(&DynSolType::parse(s)?)
    }
}

impl TryFrom<&DynSolType> for AbiType {
    type Error = TypeError;

    fn try_from(ty: &DynSolType) -> Result<Self, TypeError> {
        match ty {
            DynSolType::Int(width) => Ok(Self::Int(*width)),
            DynSolType::Uint(width) => Ok(Self::Uint(*width)),
            DynSolType::Bool => Ok(Self::Bool),
            DynSolType::String => Ok(Self::String),
            DynSolType::Array(element) => {
                Ok(Self::Slice(Box::new(Self::try_from(element.as_ref())?)))
            }
            DynSolType::FixedArray(element, len) => {
                Ok(Self::Array(Box::new(Self::try_from(element.as_ref())?), *len))
            }
            DynSolType::Address => Ok(Self::Address),
            DynSolType::FixedBytes(size) => Ok(Self::FixedBytes(*size)),
            DynSolType::Bytes => Ok(Self::Bytes),
            DynSolType::Function => Ok(Self::Function),
            ty => Err(TypeError::Unknown(ty.to_string())),
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(width) => write!(f, "int{width}"),
            Self::Uint(width) => write!(f, "uint{width}"),
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::Slice(element) => write!(f, "{element}[]"),
            Self::Array(element, len) => write!(f, "{element}[{len}]"),
            Self::Address => f.write_str("address"),
            Self::FixedBytes(size) => write!(f, "bytes{size}"),
            Self::Bytes => f.write_str("bytes"),
            Self::Hash => f.write_str("hash"),
            Self::FixedPoint => f.write_str("fixed"),
            Self::Function => f.write_str("function"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalar_types() {
        assert_eq!(AbiType::parse("uint256").unwrap(), AbiType::Uint(256));
        assert_eq!(AbiType::parse("int8").unwrap(), AbiType::Int(8));
        assert_eq!(AbiType::parse("bool").unwrap(), AbiType::Bool);
        assert_eq!(AbiType::parse("address").unwrap(), AbiType::Address);
        assert_eq!(AbiType::parse("bytes4").unwrap(), AbiType::FixedBytes(4));
        assert_eq!(AbiType::parse("bytes").unwrap(), AbiType::Bytes);
        assert_eq!(AbiType::parse("function").unwrap(), AbiType::Function);
    }

    #[test]
    fn parses_nested_containers() {
        assert_eq!(
            AbiType::parse("uint256[]").unwrap(),
            AbiType::Slice(Box::new(AbiType::Uint(256)))
        );
        assert_eq!(
            AbiType::parse("bytes4[2][]").unwrap(),
            AbiType::Slice(Box::new(AbiType::Array(Box::new(AbiType::FixedBytes(4)), 2)))
        );
    }

    #[test]
    fn rejects_tuples() {
        let err = AbiType::parse("(uint256,bool)").unwrap_err();
        assert!(matches!(err, TypeError::Unknown(_)), "{err}");
    }

    #[test]
    fn displays_canonical_form() {
        for s in ["uint256", "int8", "bytes4[2]", "address[]", "string", "bytes"] {
            assert_eq!(AbiType::parse(s).unwrap().to_string(), s);
        }
        assert_eq!(AbiType::Hash.to_string(), "hash");
        assert_eq!(AbiType::FixedPoint.to_string(), "fixed");
    }
}
