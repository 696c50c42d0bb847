//! # Shared Utility Functions
//!
//! Display helpers used by the dashboard client.
//!
//! ## Hash Formatting
//!
//! Functions for formatting transaction hashes and addresses for display:
//! - [`format_hash`] - Format with ellipsis (first N and last M characters)
//! - [`truncate_hash`] - `format_hash` with the usual 6/4 split
//!
//! ## Sizes
//!
//! - [`format_file_size`] - Human readable byte counts for document listings
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_hash, format_file_size};
//!
//! let hash = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
//! assert_eq!(format_hash(hash, 6, 4), "0x5c50...2060");
//! assert_eq!(format_file_size(1536), "1.5 KB");
//! ```

/// Format a hash or address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the input is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_hash;
///
/// let addr = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";
/// assert_eq!(format_hash(addr, 6, 4), "0xde0b...7bae");
/// assert_eq!(format_hash("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_hash(hash: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = hash.len();

    // Hashes are hex so byte indexing is safe once the bounds hold
    if len <= prefix_len + suffix_len || !hash.is_ascii() {
        return hash.to_string();
    }

    format!("{}...{}", &hash[..prefix_len], &hash[len - suffix_len..])
}

/// Format a hash with a 6-character prefix (keeps `0x` plus four digits) and 4-character suffix.
pub fn truncate_hash(hash: &str) -> String {
    format_hash(hash, 6, 4)
}

/// Format a byte count as B/KB/MB/GB with one decimal place above bytes.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}
