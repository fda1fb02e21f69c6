//! Host system snapshot, logged once at startup.

use serde::Serialize;

/// Basic information about the host system.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub cpu_count: usize,
    pub os: String,
    pub os_version: String,
    pub arch: String,
    /// Total physical memory in bytes, 0 if unknown.
    pub total_memory: u64,
    /// Available memory in bytes, 0 if unknown.
    pub available_memory: u64,
}

impl SystemInfo {
    /// Takes a snapshot of the current system.
    ///
    /// Never fails; fields that cannot be determined are left at their
    /// "unknown" values.
    pub fn gather() -> Self {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let (total_memory, available_memory) = memory_info();

        Self {
            cpu_count,
            os: std::env::consts::OS.to_owned(),
            os_version: os_version(),
            arch: std::env::consts::ARCH.to_owned(),
            total_memory,
            available_memory,
        }
    }
}

#[cfg(target_os = "linux")]
fn os_version() -> String {
    // the distribution name from os-release is far more useful in a log
    // than a bare kernel version
    std::fs::read_to_string("/etc/os-release")
        .ok()
        .as_deref()
        .and_then(pretty_name)
        .unwrap_or_else(|| "Linux".to_owned())
}

#[cfg(not(target_os = "linux"))]
fn os_version() -> String {
    "Unknown".to_owned()
}

#[cfg(target_os = "linux")]
fn memory_info() -> (u64, u64) {
    let Ok(meminfo) = std::fs::read_to_string("/proc/meminfo") else {
        return (0, 0);
    };

    (
        meminfo_bytes(&meminfo, "MemTotal:"),
        meminfo_bytes(&meminfo, "MemAvailable:"),
    )
}

#[cfg(not(target_os = "linux"))]
fn memory_info() -> (u64, u64) {
    (0, 0)
}

/// Extracts the `PRETTY_NAME` value from os-release text.
fn pretty_name(text: &str) -> Option<String> {
    text.lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim_matches('"').to_owned())
}

/// Finds a meminfo row by its label and returns its value in bytes.
///
/// Rows look like `MemTotal:       16384000 kB`.
fn meminfo_bytes(meminfo: &str, label: &str) -> u64 {
    meminfo
        .lines()
        .find_map(|line| line.strip_prefix(label))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.parse::<u64>().ok())
        .map(|kib| kib * 1024)
        .unwrap_or(0)
}
