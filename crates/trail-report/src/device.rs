//! Device information parsed from a User-Agent header.
//!
//! Best-effort string matching over the recorded header; anything
//! unrecognized comes back as `Unknown`/`Other` rather than an error.

use serde::{Deserialize, Serialize};

/// Parsed device and browser information for an audit entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Desktop, Mobile, Tablet, or Unknown.
    pub device_type: String,
    /// Browser family.
    pub browser: String,
    /// Browser version token, when one could be extracted.
    #[serde(default)]
    pub browser_version: Option<String>,
    /// Operating system family.
    pub os: String,
    /// OS version, when one could be extracted.
    #[serde(default)]
    pub os_version: Option<String>,
    /// The raw header the rest was derived from.
    pub user_agent: String,
}

/// Parse a raw User-Agent header into structured device info.
pub fn parse_user_agent(user_agent: Option<&str>) -> DeviceInfo {
    let Some(raw) = user_agent.filter(|ua| !ua.is_empty()) else {
        return DeviceInfo {
            device_type: "Unknown".to_string(),
            browser: "Unknown".to_string(),
            browser_version: None,
            os: "Unknown".to_string(),
            os_version: None,
            user_agent: "-".to_string(),
        };
    };

    DeviceInfo {
        device_type: device_type(raw).to_string(),
        browser: browser(raw).to_string(),
        browser_version: browser_version(raw),
        os: os_name(raw).to_string(),
        os_version: os_version(raw),
        user_agent: raw.to_string(),
    }
}

fn device_type(ua: &str) -> &'static str {
    let lower = ua.to_lowercase();
    if lower.contains("mobile") {
        "Mobile"
    } else if lower.contains("tablet") || lower.contains("ipad") {
        "Tablet"
    } else {
        "Desktop"
    }
}

fn browser(ua: &str) -> &'static str {
    if ua.contains("Edg/") || ua.contains("Edge/") {
        "Edge"
    } else if ua.contains("Chrome/") && !ua.contains("Edg") {
        "Chrome"
    } else if ua.contains("Firefox/") {
        "Firefox"
    } else if ua.contains("Safari/") && !ua.contains("Chrome") {
        "Safari"
    } else if ua.contains("Opera/") || ua.contains("OPR/") {
        "Opera"
    } else {
        "Other"
    }
}

fn browser_version(ua: &str) -> Option<String> {
    for prefix in ["Edg/", "Chrome/", "Firefox/", "Version/"] {
        if ua.contains(prefix) {
            return version_after(ua, prefix);
        }
    }
    None
}

/// The token following `prefix`, up to the next space or closing paren.
fn version_after(ua: &str, prefix: &str) -> Option<String> {
    let start = ua.find(prefix)? + prefix.len();
    let rest = &ua[start..];
    let end = rest.find([' ', ')']).unwrap_or(rest.len());
    let version = &rest[..end];
    (!version.is_empty()).then(|| version.to_string())
}

// iPhone/iPad UAs contain "like Mac OS X", so iOS is checked before macOS.
fn os_name(ua: &str) -> &'static str {
    if ua.contains("Windows NT 10.0") {
        "Windows 10/11"
    } else if ua.contains("Windows NT 6.3") {
        "Windows 8.1"
    } else if ua.contains("Windows NT 6.2") {
        "Windows 8"
    } else if ua.contains("Windows NT 6.1") {
        "Windows 7"
    } else if ua.contains("Windows") {
        "Windows"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "iOS"
    } else if ua.contains("Mac OS X") {
        "macOS"
    } else if ua.contains("Android") {
        "Android"
    } else if ua.contains("Linux") {
        "Linux"
    } else {
        "Other"
    }
}

fn os_version(ua: &str) -> Option<String> {
    if let Some(version) =
        delimited(ua, "iPhone OS ", " like").or_else(|| delimited(ua, "CPU OS ", " like"))
    {
        return Some(version.replace('_', "."));
    }
    if let Some(version) = delimited(ua, "Mac OS X ", ")") {
        let version = match version.split_once(';') {
            Some((head, _)) => head,
            None => version,
        };
        return Some(version.trim().replace('_', "."));
    }
    if let Some(version) = delimited(ua, "Android ", ";") {
        return Some(version.trim().to_string());
    }
    None
}

/// Substring between `prefix` and the next occurrence of `end`.
fn delimited<'a>(ua: &'a str, prefix: &str, end: &str) -> Option<&'a str> {
    let start = ua.find(prefix)? + prefix.len();
    let rest = &ua[start..];
    let stop = rest.find(end)?;
    Some(&rest[..stop])
}
