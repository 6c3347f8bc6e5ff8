// Bank Operation - Core Library
// Exposes all modules for use by the binary and tests

pub mod config;
pub mod entities;
pub mod errors;
pub mod operation;
pub mod system_info;

// Re-export commonly used types
pub use config::ProgramConfig;
pub use entities::{Atm, Bank, CashMachine, PointOfSale, Pos};
pub use errors::SystemInfoError;
pub use operation::{exit_code, run};
pub use system_info::{
    HostInterfaces, InterfaceSource, MacAddress, NetworkInterface,
    SystemInfo, SystemReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
