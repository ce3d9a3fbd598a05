//! Contract artifact configuration.
//!
//! The template directory and the clause-name → request-file mapping are
//! injected at construction time, so deployments can relocate the contract
//! and tests can point the orchestrator at fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Where a contract's on-disk artifacts live and which request file backs
/// each clause.
///
/// The template directory is expected to contain `state.json`,
/// `data.json`, a `requests/` directory with one payload per mapped
/// clause, and whatever template artifacts the engine collaborator reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Directory holding the contract template and its artifacts.
    pub template_dir: PathBuf,
    /// Clause name → request file name, relative to `requests/`.
    #[serde(default = "default_requests")]
    pub requests: BTreeMap<String, String>,
}

fn default_requests() -> BTreeMap<String, String> {
    [
        ("ShipmentAgreed", "shipmentagreedrequest.json"),
        ("AutomaticAgreement", "automaticagreementrequest.json"),
        ("BuyerPayment", "buyerpaymentrequest.json"),
        ("EndLitigation", "endlitigationrequest.json"),
        ("LateShipment", "lateshipmentrequest.json"),
        ("SetContractInLitigation", "setcontractinlitigationrequest.json"),
        ("ShipmentDelivered", "shipmentdeliveredrequest.json"),
        ("TemperatureExcess", "temperatureexcessrequest.json"),
    ]
    .into_iter()
    .map(|(clause, file)| (clause.to_string(), file.to_string()))
    .collect()
}

impl ContractConfig {
    /// Configuration for the given template directory with the default
    /// clause mapping.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            requests: default_requests(),
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// The file must carry `template_dir`; `requests` falls back to the
    /// default mapping when omitted.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Path of the persisted contract state.
    pub fn state_path(&self) -> PathBuf {
        self.template_dir.join("state.json")
    }

    /// Path of the static contract data.
    pub fn data_path(&self) -> PathBuf {
        self.template_dir.join("data.json")
    }

    /// Resolve the request payload path for a clause name.
    ///
    /// Returns `None` when no request file is mapped to the clause.
    pub fn request_path(&self, clause_name: &str) -> Option<PathBuf> {
        self.requests
            .get(clause_name)
            .map(|file| self.template_dir.join("requests").join(file))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_mapping_resolves_all_clauses() {
        let config = ContractConfig::new("/contracts/refrigerated-transportation");
        let expected = [
            ("ShipmentAgreed", "shipmentagreedrequest.json"),
            ("AutomaticAgreement", "automaticagreementrequest.json"),
            ("BuyerPayment", "buyerpaymentrequest.json"),
            ("EndLitigation", "endlitigationrequest.json"),
            ("LateShipment", "lateshipmentrequest.json"),
            ("SetContractInLitigation", "setcontractinlitigationrequest.json"),
            ("ShipmentDelivered", "shipmentdeliveredrequest.json"),
            ("TemperatureExcess", "temperatureexcessrequest.json"),
        ];
        assert_eq!(config.requests.len(), expected.len());
        for (clause, file) in expected {
            let path = config.request_path(clause).unwrap();
            assert!(
                path.ends_with(Path::new("requests").join(file)),
                "{} resolved to {}",
                clause,
                path.display()
            );
        }
    }

    #[test]
    fn test_unknown_clause_has_no_request() {
        let config = ContractConfig::new("/tmp/contract");
        assert!(config.request_path("NotAClause").is_none());
    }

    #[test]
    fn test_artifact_paths() {
        let config = ContractConfig::new("/tmp/contract");
        assert_eq!(config.state_path(), PathBuf::from("/tmp/contract/state.json"));
        assert_eq!(config.data_path(), PathBuf::from("/tmp/contract/data.json"));
    }

    #[test]
    fn test_from_file_with_custom_mapping() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"template_dir": "/srv/contracts/demo", "requests": {{"Ping": "pingrequest.json"}}}}"#
        )
        .unwrap();

        let config = ContractConfig::from_file(file.path()).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("/srv/contracts/demo"));
        assert_eq!(config.requests.len(), 1);
        assert_eq!(
            config.request_path("Ping").unwrap(),
            PathBuf::from("/srv/contracts/demo/requests/pingrequest.json")
        );
    }

    #[test]
    fn test_from_file_defaults_requests_when_omitted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"template_dir": "/srv/contracts/demo"}}"#).unwrap();

        let config = ContractConfig::from_file(file.path()).unwrap();
        assert_eq!(config.requests.len(), 8);
        assert!(config.request_path("ShipmentDelivered").is_some());
    }

    #[test]
    fn test_from_file_missing_is_error() {
        assert!(ContractConfig::from_file(Path::new("/nonexistent/config.json")).is_err());
    }
}
