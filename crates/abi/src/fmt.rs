//! Typed value to string conversion.

use crate::{error::FormatError, ty::AbiType, value::AbiValue};
use alloy_primitives::hex;

/// Renders a typed value back into its canonical string form.
///
/// The inverse of [`parse_value`](crate::parse_value) where both are
/// defined, with one deliberate asymmetry: containers are rendered (each
/// element recursively, joined with `,` and wrapped in `[` `]`) even though
/// they are rejected on the parsing side. Fixed byte arrays render at their
/// full declared width, so a value parsed from `0xab` against `bytes4`
/// comes back as `0x000000ab`.
pub fn format_value(ty: &AbiType, value: &AbiValue) -> Result<String, FormatError> {
    match (ty, value) {
        (AbiType::Int(_), AbiValue::Int(value, _)) => Ok(value.to_string()),
        (AbiType::Uint(_), AbiValue::Uint(value, _)) => Ok(value.to_string()),
        (AbiType::Bool, AbiValue::Bool(value)) => Ok(value.to_string()),
        (AbiType::String, AbiValue::String(value)) => Ok(value.clone()),
        (AbiType::Slice(element) | AbiType::Array(element, _), AbiValue::Array(values)) => {
            let rendered = values
                .iter()
                .map(|value| format_value(element, value))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", rendered.join(",")))
        }
        (AbiType::Address, AbiValue::Address(value)) => Ok(value.to_string()),
        (AbiType::FixedBytes(_), AbiValue::FixedBytes(bytes)) => Ok(hex::encode_prefixed(bytes)),
        (AbiType::Bytes, AbiValue::Bytes(bytes)) => Ok(hex::encode_prefixed(bytes)),
        (AbiType::Hash, AbiValue::Hash(value)) => Ok(value.to_string()),
        (ty @ (AbiType::FixedPoint | AbiType::Function), _) => {
            Err(FormatError::Unhandled(ty.clone()))
        }
        (ty, value) => {
            Err(FormatError::Mismatch { ty: ty.clone(), found: value.type_name() })
        }
    }
}
