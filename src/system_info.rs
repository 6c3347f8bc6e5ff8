// 🖥️ System Info - registration number, local time, MAC address
//
// One report, three inputs:
// 1. Registration number: supplied by the caller, printed verbatim
// 2. Current date/time: local wall clock, chrono's default rendering
// 3. MAC address: hardware address of the FIRST interface the host lists
//
// Interfaces are listed in kernel index order (lo, then devices in the
// order they were registered). No filtering on loopback/up/down is
// applied; the first entry wins.

use crate::errors::SystemInfoError;
use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use sysinfo::Networks;

pub const MAC_NOT_AVAILABLE: &str = "Not available";

// ============================================================================
// MAC ADDRESS
// ============================================================================

/// Six-byte link-layer address
///
/// Displays as uppercase hex pairs joined by '-': `AA-BB-CC-DD-EE-FF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// All-zero address (what hosts report for loopback and virtual links)
    pub fn is_unspecified(&self) -> bool {
        self.0 == [0; 6]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for MacAddress {
    type Err = SystemInfoError;

    /// Accepts `AA:BB:CC:DD:EE:FF` or `aa-bb-cc-dd-ee-ff`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SystemInfoError::InvalidMacAddress(s.to_string());

        let s = s.trim();
        let separator = if s.contains(':') { ':' } else { '-' };
        if s.contains(':') && s.contains('-') {
            return Err(invalid());
        }

        let parts: Vec<&str> = s.split(separator).collect();
        if parts.len() != 6 {
            return Err(invalid());
        }

        let mut octets = [0u8; 6];
        for (slot, part) in octets.iter_mut().zip(&parts) {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *slot = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }

        Ok(MacAddress(octets))
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// INTERFACE SOURCE
// ============================================================================

/// One entry of the host's network interface table
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInterface {
    pub name: String,

    /// None when the interface exposes no hardware address
    pub mac_address: Option<MacAddress>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, mac_address: Option<MacAddress>) -> Self {
        NetworkInterface {
            name: name.into(),
            mac_address,
        }
    }
}

/// Anything that can list network interfaces, in its own order
pub trait InterfaceSource {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, SystemInfoError>;
}

/// The real host, read through `sysinfo`
///
/// sysinfo keeps interfaces in a hash map, so the entries are put back in
/// kernel index order before anyone looks at "the first" one.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostInterfaces;

impl InterfaceSource for HostInterfaces {
    fn interfaces(&self) -> Result<Vec<NetworkInterface>, SystemInfoError> {
        let networks = Networks::new_with_refreshed_list();

        let entries = networks
            .list()
            .iter()
            .map(|(name, data)| {
                let mac = MacAddress(data.mac_address().0);
                let mac_address = if mac.is_unspecified() { None } else { Some(mac) };
                NetworkInterface::new(name.clone(), mac_address)
            })
            .collect::<Vec<_>>();

        let interfaces = order_by_index(entries, interface_index);
        tracing::debug!(count = interfaces.len(), "enumerated network interfaces");
        Ok(interfaces)
    }
}

/// Kernel interface index for `name` (None if the name is unknown)
#[cfg(unix)]
pub fn interface_index(name: &str) -> Option<u32> {
    nix::net::if_::if_nametoindex(name).ok()
}

#[cfg(not(unix))]
pub fn interface_index(_name: &str) -> Option<u32> {
    None
}

/// Sort by interface index; unindexed entries go last, ties break on name
pub fn order_by_index<F>(mut interfaces: Vec<NetworkInterface>, index_of: F) -> Vec<NetworkInterface>
where
    F: Fn(&str) -> Option<u32>,
{
    interfaces.sort_by_cached_key(|iface| {
        (index_of(&iface.name).unwrap_or(u32::MAX), iface.name.clone())
    });
    interfaces
}

// ============================================================================
// SYSTEM REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemReport {
    pub registration_number: String,
    pub generated_at: NaiveDateTime,
    pub mac_address: Option<MacAddress>,
}

impl SystemReport {
    /// Text of the "MAC Address:" line without the label
    pub fn mac_display(&self) -> String {
        match self.mac_address {
            Some(mac) => mac.to_string(),
            None => MAC_NOT_AVAILABLE.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SystemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registration Number: {}", self.registration_number)?;
        writeln!(f, "Current Date/Time: {}", self.generated_at)?;
        writeln!(f, "MAC Address: {}", self.mac_display())
    }
}

// ============================================================================
// SYSTEM INFO
// ============================================================================

pub struct SystemInfo<S: InterfaceSource = HostInterfaces> {
    source: S,
}

impl SystemInfo<HostInterfaces> {
    pub fn from_host() -> Self {
        SystemInfo::new(HostInterfaces)
    }
}

impl<S: InterfaceSource> SystemInfo<S> {
    pub fn new(source: S) -> Self {
        SystemInfo { source }
    }

    /// Build a report stamped with the current local time
    pub fn report(&self, registration_number: &str) -> Result<SystemReport, SystemInfoError> {
        self.report_at(registration_number, Local::now().naive_local())
    }

    pub fn report_at(
        &self,
        registration_number: &str,
        generated_at: NaiveDateTime,
    ) -> Result<SystemReport, SystemInfoError> {
        if registration_number.is_empty() {
            return Err(SystemInfoError::EmptyRegistrationNumber);
        }

        let mac_address = self.first_interface_mac()?;
        if mac_address.is_none() {
            tracing::info!("no hardware address on the first network interface");
        }

        Ok(SystemReport {
            registration_number: registration_number.to_string(),
            generated_at,
            mac_address,
        })
    }

    /// Hardware address of the first listed interface, if it has one
    fn first_interface_mac(&self) -> Result<Option<MacAddress>, SystemInfoError> {
        let interfaces = self.source.interfaces()?;

        Ok(interfaces.into_iter().next().and_then(|iface| {
            tracing::debug!(interface = %iface.name, "using first network interface");
            iface.mac_address
        }))
    }

    /// Render the report and hand it to `out` in a single write
    pub fn write_details<W: Write>(
        &self,
        registration_number: &str,
        out: &mut W,
    ) -> Result<SystemReport, SystemInfoError> {
        let report = self.report(registration_number)?;
        out.write_all(report.to_string().as_bytes())?;
        out.flush()?;
        Ok(report)
    }

    pub fn print_details(&self, registration_number: &str) -> Result<(), SystemInfoError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_details(registration_number, &mut handle)?;
        Ok(())
    }
}
