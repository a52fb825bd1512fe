//! Unpacking raw call results into typed values.

use crate::{error::UnpackError, ty::AbiType, value::AbiValue};
use alloy_dyn_abi::FunctionExt;
use alloy_json_abi::{Function, JsonAbi};

/// Unpacks a raw result blob into one typed value per declared output.
///
/// Destinations are allocated up front from the declared output types and
/// the decoder is handed the whole batch in a single invocation. With zero
/// declared outputs the decoder is never invoked at all.
pub fn unpack_outputs<F>(
    outputs: &[AbiType],
    decode: F,
    data: &[u8],
) -> Result<Vec<AbiValue>, UnpackError>
where
    F: FnOnce(&mut [AbiValue], &[u8]) -> Result<(), UnpackError>,
{
    match outputs {
        [] => Ok(Vec::new()),
        [output] => {
            let mut dest = vec![AbiValue::default_of(output)?];
            decode(&mut dest, data)?;
            Ok(dest)
        }
        outputs => {
            let mut dest = outputs.iter().map(destination).collect::<Result<Vec<_>, _>>()?;
            decode(&mut dest, data)?;
            Ok(dest)
        }
    }
}

/// Allocates one destination for a declared output in the multi-output case.
///
/// Container outputs are allocated from their *element* type. The decoder
/// overwrites every destination on success, so for representable types this
/// is invisible; it is kept because the difference is observable when
/// allocation itself fails. See DESIGN.md.
fn destination(ty: &AbiType) -> Result<AbiValue, UnpackError> {
    let value = match ty {
        AbiType::Slice(element) | AbiType::Array(element, _) => AbiValue::default_of(element),
        ty => AbiValue::default_of(ty),
    };
    Ok(value?)
}

/// Looks a method up in an ABI document and unpacks its raw call result.
pub fn unpack_result(
    abi: &JsonAbi,
    name: &str,
    data: &[u8],
) -> Result<Vec<AbiValue>, UnpackError> {
    let Some(function) = abi.function(name).and_then(|overloads| overloads.first()) else {
        return Err(UnpackError::NoSuchMethod(name.to_string()));
    };
    let outputs = function
        .outputs
        .iter()
        .map(|param| AbiType::parse(&param.selector_type()))
        .collect::<Result<Vec<_>, _>>()?;
    unpack_outputs(&outputs, |dest, data| fill_decoded(function, dest, data), data)
}

/// Decodes the result bytes with the external ABI decoder and moves the
/// values into the pre-allocated destinations.
fn fill_decoded(
    function: &Function,
    dest: &mut [AbiValue],
    data: &[u8],
) -> Result<(), UnpackError> {
    let decoded = function.abi_decode_output(data).map_err(|source| {
        UnpackError::DecodeFailed { method: function.name.clone(), source }
    })?;
    for (slot, value) in dest.iter_mut().zip(decoded) {
        *slot = AbiValue::try_from(value)?;
    }
    Ok(())
}
