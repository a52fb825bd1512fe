use alloy_primitives::{
    utils::{ParseUnits, Unit},
    U256,
};
use eyre::{Context, Result};
use std::str::FromStr;

/// Parses a human gas value into wei.
///
/// Accepts a bare wei amount (`1000`), a `0x`-prefixed hex amount, or an
/// amount with a unit suffix such as `10gwei`, `1.5 gwei` or `1ether`.
pub fn parse_wei_value(value: &str) -> Result<U256> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix("0x") {
        return Ok(U256::from_str_radix(hex, 16)?);
    }

    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);
    let unit = match unit.trim() {
        "" => Unit::WEI,
        unit => Unit::from_str(&unit.to_lowercase())
            .wrap_err_with(|| format!("invalid gas unit {unit}"))?,
    };
    Ok(ParseUnits::parse_units(amount, unit)?.get_absolute())
}
