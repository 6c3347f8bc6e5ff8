// ⚙️ Program configuration
//
// The entry point takes no arguments and reads no environment; the values
// below are the literals it runs with. JSON (de)serialization exists so a
// config can be inspected or fed to `run` from tests.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRATION_NUMBER: &str = "21MIC0105";
pub const DEFAULT_CUSTOMER_ID: &str = "21MIC0105";
pub const DEFAULT_ACCOUNT_NUMBER: i64 = 91999494;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Identifier printed verbatim in the system report
    pub registration_number: String,

    /// Customer id stored on the Bank record
    pub customer_id: String,

    /// Account number stored on the Bank record (not validated)
    pub account_number: i64,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        ProgramConfig {
            registration_number: DEFAULT_REGISTRATION_NUMBER.to_string(),
            customer_id: DEFAULT_CUSTOMER_ID.to_string(),
            account_number: DEFAULT_ACCOUNT_NUMBER,
        }
    }
}

impl ProgramConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse program config")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize program config")
    }
}
