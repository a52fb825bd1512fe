//! String to typed value conversion.

use crate::{error::ParseError, ty::AbiType, value::AbiValue};
use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::Function;
use alloy_primitives::{hex, Address, Sign, B256, I256, U256};

/// Parses a string into a typed value matching the descriptor.
///
/// Surrounding spaces are trimmed before interpretation. Container types are
/// not accepted here: composite values cannot be written as single literal
/// arguments, so `T[]`/`T[N]` fail with [`ParseError::Unhandled`] even
/// though [`format_value`](crate::format_value) renders them.
pub fn parse_value(ty: &AbiType, text: &str) -> Result<AbiValue, ParseError> {
    let text = text.trim_matches(' ');
    match ty {
        AbiType::Int(width) => {
            let (sign, magnitude) = parse_big(text)?;
            let narrowed = match *width {
                8 => Some(narrow(magnitude) as u8 as i8 as i64),
                16 => Some(narrow(magnitude) as u16 as i16 as i64),
                32 => Some(narrow(magnitude) as u32 as i32 as i64),
                64 => Some(narrow(magnitude) as i64),
                _ => None,
            };
            let value = match narrowed {
                Some(narrowed) => I256::try_from(narrowed)
                    .map_err(|_| ParseError::NotAnInteger(text.into()))?,
                None => I256::checked_from_sign_and_abs(sign, magnitude)
                    .ok_or_else(|| ParseError::NotAnInteger(text.into()))?,
            };
            Ok(AbiValue::Int(value, *width))
        }
        AbiType::Uint(width) => {
            let (sign, magnitude) = parse_big(text)?;
            let value = match *width {
                8 => U256::from(narrow(magnitude) as u8),
                16 => U256::from(narrow(magnitude) as u16),
                32 => U256::from(narrow(magnitude) as u32),
                64 => U256::from(narrow(magnitude)),
                _ => {
                    if sign.is_negative() {
                        return Err(ParseError::NotAnInteger(text.into()));
                    }
                    magnitude
                }
            };
            Ok(AbiValue::Uint(value, *width))
        }
        AbiType::Bool => Ok(AbiValue::Bool(matches!(text, "true" | "True" | "1"))),
        AbiType::String => Ok(AbiValue::String(text.to_string())),
        AbiType::Slice(_) | AbiType::Array(..) => Err(ParseError::Unhandled(ty.clone())),
        AbiType::Address => Ok(AbiValue::Address(text.parse::<Address>()?)),
        AbiType::FixedBytes(size) => {
            if !(1..=32).contains(size) {
                return Err(ParseError::InvalidSize(*size));
            }
            let decoded = hex::decode(text)?;
            if decoded.len() > *size {
                return Err(ParseError::InvalidSize(decoded.len()));
            }
            let mut buf = vec![0; *size];
            buf[size - decoded.len()..].copy_from_slice(&decoded);
            Ok(AbiValue::FixedBytes(buf))
        }
        AbiType::Bytes => Ok(AbiValue::Bytes(hex::decode(text)?)),
        AbiType::Hash => Ok(AbiValue::Hash(text.parse::<B256>()?)),
        AbiType::FixedPoint | AbiType::Function => Err(ParseError::Unhandled(ty.clone())),
    }
}

/// Given a function and string arguments, parses each argument against the
/// declared input type and ABI-encodes the lot, selector included.
pub fn encode_function_args<I, S>(func: &Function, args: I) -> Result<Vec<u8>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values = std::iter::zip(&func.inputs, args)
        .map(|(input, arg)| {
            let ty = AbiType::parse(&input.selector_type())?;
            Ok(DynSolValue::from(&parse_value(&ty, arg.as_ref())?))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(func.abi_encode_input(&values)?)
}

/// Splits an optional sign off a base-10 magnitude.
fn parse_big(text: &str) -> Result<(Sign, U256), ParseError> {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (Sign::Negative, &text[1..]),
        Some(b'+') => (Sign::Positive, &text[1..]),
        _ => (Sign::Positive, text),
    };
    let magnitude = U256::from_str_radix(digits, 10)
        .map_err(|_| ParseError::NotAnInteger(text.to_string()))?;
    Ok((sign, magnitude))
}

/// The unsigned 64-bit representation of a big integer's magnitude.
///
/// Widths 8, 16, 32 and 64 are narrowed through this, signed types
/// included, so the sign and any bits above the width are discarded rather
/// than reported as overflow. See DESIGN.md before changing this.
fn narrow(magnitude: U256) -> u64 {
    magnitude.as_limbs()[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn narrows_oversized_uints() {
        assert_eq!(
            parse_value(&AbiType::Uint(8), "300").unwrap(),
            AbiValue::Uint(U256::from(44u64), 8)
        );
        assert_eq!(
            parse_value(&AbiType::Uint(16), "65537").unwrap(),
            AbiValue::Uint(U256::from(1u64), 16)
        );
    }

    #[test]
    fn keeps_wide_integers_intact() {
        let max = U256::MAX.to_string();
        assert_eq!(parse_value(&AbiType::Uint(256), &max).unwrap(), AbiValue::Uint(U256::MAX, 256));
        assert_eq!(
            parse_value(&AbiType::Int(256), "-5").unwrap(),
            AbiValue::Int(I256::try_from(-5i64).unwrap(), 256)
        );
        assert_eq!(
            parse_value(&AbiType::Uint(128), "340282366920938463463374607431768211455").unwrap(),
            AbiValue::Uint(U256::from_str_radix("340282366920938463463374607431768211455", 10).unwrap(), 128)
        );
    }

    #[test]
    fn odd_widths_are_not_narrowed() {
        // Only 8/16/32/64 go through the narrowing path; everything else
        // keeps the parsed value untouched, even above the type's range.
        assert_eq!(
            parse_value(&AbiType::Uint(24), "16777300").unwrap(),
            AbiValue::Uint(U256::from(16_777_300u64), 24)
        );
    }

    #[test]
    fn narrowing_discards_the_sign() {
        // The narrowing path works on the magnitude's low bits, so negative
        // inputs come out positive and large positives can flip negative.
        assert_eq!(
            parse_value(&AbiType::Int(8), "-1").unwrap(),
            AbiValue::Int(I256::try_from(1i64).unwrap(), 8)
        );
        assert_eq!(
            parse_value(&AbiType::Int(8), "200").unwrap(),
            AbiValue::Int(I256::try_from(-56i64).unwrap(), 8)
        );
    }

    #[test]
    fn negative_wide_uints_are_rejected() {
        let err = parse_value(&AbiType::Uint(256), "-5").unwrap_err();
        assert!(matches!(err, ParseError::NotAnInteger(_)), "{err}");
    }

    #[test]
    fn rejects_bad_integers() {
        for text in ["", "12a", "0x10", "1.5", "--1"] {
            let err = parse_value(&AbiType::Uint(256), text).unwrap_err();
            assert!(matches!(err, ParseError::NotAnInteger(_)), "{text}: {err}");
        }
    }

    #[test]
    fn bools_are_lenient() {
        for text in ["true", "True", "1"] {
            assert_eq!(parse_value(&AbiType::Bool, text).unwrap(), AbiValue::Bool(true), "{text}");
        }
        // Anything unrecognized is false, never an error.
        for text in ["false", "yes", "TRUE", "0", ""] {
            assert_eq!(parse_value(&AbiType::Bool, text).unwrap(), AbiValue::Bool(false), "{text}");
        }
    }

    #[test]
    fn trims_surrounding_spaces() {
        assert_eq!(
            parse_value(&AbiType::Uint(256), "  42 ").unwrap(),
            AbiValue::Uint(U256::from(42u64), 256)
        );
        assert_eq!(
            parse_value(&AbiType::String, " hello world ").unwrap(),
            AbiValue::String("hello world".to_string())
        );
    }

    #[test]
    fn parses_addresses() {
        let expected = AbiValue::Address(address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert_eq!(
            parse_value(&AbiType::Address, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap(),
            expected
        );
        assert_eq!(
            parse_value(&AbiType::Address, "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            expected
        );
        assert!(matches!(
            parse_value(&AbiType::Address, "0x1234").unwrap_err(),
            ParseError::BadHex(_)
        ));
    }

    #[test]
    fn right_aligns_fixed_bytes() {
        assert_eq!(
            parse_value(&AbiType::FixedBytes(4), "0xab").unwrap(),
            AbiValue::FixedBytes(vec![0x00, 0x00, 0x00, 0xab])
        );
        assert_eq!(
            parse_value(&AbiType::FixedBytes(2), "abcd").unwrap(),
            AbiValue::FixedBytes(vec![0xab, 0xcd])
        );
        assert_eq!(
            parse_value(&AbiType::FixedBytes(1), "").unwrap(),
            AbiValue::FixedBytes(vec![0x00])
        );
    }

    #[test]
    fn rejects_invalid_fixed_bytes() {
        assert!(matches!(
            parse_value(&AbiType::FixedBytes(4), "0xzz").unwrap_err(),
            ParseError::BadHex(_)
        ));
        assert!(matches!(
            parse_value(&AbiType::FixedBytes(0), "0xab").unwrap_err(),
            ParseError::InvalidSize(0)
        ));
        assert!(matches!(
            parse_value(&AbiType::FixedBytes(33), "0xab").unwrap_err(),
            ParseError::InvalidSize(33)
        ));
        assert!(matches!(
            parse_value(&AbiType::FixedBytes(2), "0xaabbcc").unwrap_err(),
            ParseError::InvalidSize(3)
        ));
    }

    #[test]
    fn parses_dynamic_bytes() {
        assert_eq!(
            parse_value(&AbiType::Bytes, "0xdeadbeef").unwrap(),
            AbiValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef])
        );
        assert_eq!(parse_value(&AbiType::Bytes, "").unwrap(), AbiValue::Bytes(Vec::new()));
    }

    #[test]
    fn parses_hashes() {
        let hash = b256!("290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563");
        assert_eq!(
            parse_value(
                &AbiType::Hash,
                "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563"
            )
            .unwrap(),
            AbiValue::Hash(hash)
        );
        assert!(matches!(
            parse_value(&AbiType::Hash, "0x1234").unwrap_err(),
            ParseError::BadHex(_)
        ));
    }

    #[test]
    fn rejects_containers() {
        let slice = AbiType::Slice(Box::new(AbiType::Uint(256)));
        assert!(matches!(
            parse_value(&slice, "[1,2]").unwrap_err(),
            ParseError::Unhandled(ref ty) if *ty == slice
        ));

        let array = AbiType::Array(Box::new(AbiType::Uint(256)), 2);
        assert!(matches!(
            parse_value(&array, "[1,2]").unwrap_err(),
            ParseError::Unhandled(_)
        ));
    }

    #[test]
    fn rejects_unrepresentable_types() {
        assert!(matches!(
            parse_value(&AbiType::FixedPoint, "1.5").unwrap_err(),
            ParseError::Unhandled(AbiType::FixedPoint)
        ));
        assert!(matches!(
            parse_value(&AbiType::Function, "0xab").unwrap_err(),
            ParseError::Unhandled(AbiType::Function)
        ));
    }

    #[test]
    fn encodes_function_args() {
        let func = Function::parse("function transfer(address to, uint256 amount)").unwrap();
        let to = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

        let encoded = encode_function_args(
            &func,
            ["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", "7"],
        )
        .unwrap();

        let expected = func
            .abi_encode_input(&[
                DynSolValue::Address(to),
                DynSolValue::Uint(U256::from(7u64), 256),
            ])
            .unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(&encoded[..4], func.selector().as_slice());
    }

    #[test]
    fn encoding_propagates_parse_failures() {
        let func = Function::parse("function set(uint256 v)").unwrap();
        let err = encode_function_args(&func, ["not-a-number"]).unwrap_err();
        assert!(matches!(err, ParseError::NotAnInteger(_)), "{err}");
    }
}
