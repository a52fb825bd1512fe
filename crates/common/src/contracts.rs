//! Loading contract ABIs and combined-JSON documents.

use crate::fs;
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use evoke_config::Config;
use eyre::{Context, ContextCompat, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A contract loaded from an ABI or combined-JSON document.
#[derive(Clone, Debug, Default)]
pub struct ContractData {
    /// Contract name; may be empty when only an ABI was supplied.
    pub name: String,
    /// Contract ABI, when one was supplied.
    pub abi: Option<JsonAbi>,
    /// Contract creation code, when the document carried one.
    pub bytecode: Option<Bytes>,
}

impl ContractData {
    /// Resolves the contract described by the configuration.
    ///
    /// A combined-JSON document wins over a plain ABI; with combined JSON a
    /// contract name is required, defaulting to the document's file stem.
    pub fn from_config(config: &Config) -> Result<Self> {
        if let Some(json) = config.json.as_deref() {
            let name = config
                .contract_name()
                .wrap_err("a contract name is required when using combined JSON")?;
            return parse_combined_json(json, &name);
        }

        let mut contract =
            Self { name: config.name.clone().unwrap_or_default(), ..Self::default() };
        if let Some(abi) = config.abi.as_deref() {
            contract.abi =
                Some(load_abi(abi).wrap_err_with(|| format!("failed to parse ABI {abi}"))?);
        }
        Ok(contract)
    }

    /// The loaded ABI, or an error naming the contract.
    pub fn abi(&self) -> Result<&JsonAbi> {
        self.abi.as_ref().ok_or_else(|| eyre::eyre!("no ABI loaded for contract {}", self.name))
    }
}

/// Loads an ABI that is either inline JSON or a path to an ABI document.
pub fn load_abi(input: &str) -> Result<JsonAbi> {
    let raw = if input.trim_start().starts_with('[') {
        input.to_string()
    } else {
        trace!(path = input, "reading ABI document");
        fs::read_to_string(input)?
    };
    serde_json::from_str(&raw).wrap_err("invalid ABI JSON")
}

/// One contract entry of a `solc --combined-json abi,bin` document.
///
/// Older solc releases embed the ABI as a JSON string, newer ones as a JSON
/// array; both forms are accepted.
#[derive(Debug, Deserialize)]
struct CombinedContract {
    #[serde(default)]
    abi: Option<serde_json::Value>,
    #[serde(default)]
    bin: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CombinedJson {
    contracts: BTreeMap<String, CombinedContract>,
}

/// Parses a `solc --combined-json abi,bin` document and extracts the named
/// contract. Contracts are keyed as `file.sol:Name`; a bare `Name` matches
/// the suffix.
pub fn parse_combined_json(path: &str, name: &str) -> Result<ContractData> {
    let raw = fs::read_to_string(path)?;
    parse_combined_json_str(&raw, name)
        .wrap_err_with(|| format!("failed to parse combined JSON {path}"))
}

/// [`parse_combined_json`] over an already-read document.
pub fn parse_combined_json_str(raw: &str, name: &str) -> Result<ContractData> {
    let combined: CombinedJson = serde_json::from_str(raw)?;

    let Some((key, contract)) = combined
        .contracts
        .iter()
        .find(|(key, _)| key.as_str() == name || key.rsplit(':').next() == Some(name))
    else {
        let known = combined.contracts.keys().cloned().collect::<Vec<_>>().join(", ");
        eyre::bail!("no contract {name} in document; found: {known}");
    };
    trace!(%key, "matched combined-JSON contract");

    let abi = match &contract.abi {
        Some(serde_json::Value::String(embedded)) => Some(serde_json::from_str(embedded)?),
        Some(value) => Some(serde_json::from_value(value.clone())?),
        None => None,
    };
    let bytecode = match contract.bin.as_deref() {
        Some(bin) if !bin.is_empty() => Some(hex::decode(bin)?.into()),
        _ => None,
    };

    Ok(ContractData { name: name.to_string(), abi, bytecode })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const COMBINED: &str = r#"{
        "contracts": {
            "contracts/Registry.sol:Registry": {
                "abi": [
                    {
                        "type": "function",
                        "name": "get",
                        "inputs": [],
                        "outputs": [{ "name": "", "type": "uint256" }],
                        "stateMutability": "view"
                    }
                ],
                "bin": "6080604052"
            },
            "contracts/Registry.sol:Helper": {
                "abi": "[]",
                "bin": ""
            }
        },
        "version": "0.8.24+commit.e11b9ed9"
    }"#;

    #[test]
    fn extracts_the_named_contract() {
        let contract = parse_combined_json_str(COMBINED, "Registry").unwrap();
        assert_eq!(contract.name, "Registry");
        assert!(contract.abi.unwrap().function("get").is_some());
        assert_eq!(contract.bytecode.unwrap().as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn accepts_string_embedded_abis() {
        let contract = parse_combined_json_str(COMBINED, "Helper").unwrap();
        assert!(contract.abi.unwrap().functions().next().is_none());
        assert!(contract.bytecode.is_none());
    }

    #[test]
    fn unknown_contracts_list_what_exists() {
        let err = parse_combined_json_str(COMBINED, "Token").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no contract Token"), "{msg}");
        assert!(msg.contains("Registry"), "{msg}");
    }

    #[test]
    fn loads_inline_abis() {
        let abi = load_abi(r#"[{ "type": "function", "name": "ping", "inputs": [], "outputs": [], "stateMutability": "nonpayable" }]"#).unwrap();
        assert!(abi.function("ping").is_some());
    }

    #[test]
    fn loads_abis_from_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{ "type": "function", "name": "ping", "inputs": [], "outputs": [], "stateMutability": "nonpayable" }]"#).unwrap();
        let abi = load_abi(file.path().to_str().unwrap()).unwrap();
        assert!(abi.function("ping").is_some());
    }

    #[test]
    fn config_resolution_prefers_combined_json() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(COMBINED.as_bytes()).unwrap();

        let config = Config {
            json: Some(file.path().to_str().unwrap().to_string()),
            name: Some("Registry".to_string()),
            abi: Some("[]".to_string()),
            ..Default::default()
        };
        let contract = ContractData::from_config(&config).unwrap();
        assert_eq!(contract.name, "Registry");
        assert!(contract.abi.unwrap().function("get").is_some());
    }

    #[test]
    fn config_resolution_falls_back_to_the_abi() {
        let config = Config {
            abi: Some(r#"[{ "type": "function", "name": "ping", "inputs": [], "outputs": [], "stateMutability": "nonpayable" }]"#.to_string()),
            name: Some("Pinger".to_string()),
            ..Default::default()
        };
        let contract = ContractData::from_config(&config).unwrap();
        assert_eq!(contract.name, "Pinger");
        assert!(contract.abi.unwrap().function("ping").is_some());
    }
}
