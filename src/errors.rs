// ⚠️ Error types for the system report path
//
// Everything above the report (the run sequence, the binary) works with
// anyhow::Result and adds context; this enum is what the library returns.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemInfoError {
    /// Registration number was the empty string
    #[error("registration number must not be empty")]
    EmptyRegistrationNumber,

    /// The host refused or failed to list its network interfaces
    #[error("failed to enumerate network interfaces: {0}")]
    InterfaceEnumeration(String),

    /// Text that is not six hex byte pairs separated by ':' or '-'
    #[error("invalid MAC address: {0:?}")]
    InvalidMacAddress(String),

    /// Writing the report to its destination failed
    #[error("failed to write system report: {0}")]
    Io(#[from] std::io::Error),
}
