//! Build information module
//!
//! Contains compile-time constants for build number and timestamp.

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("NUTRILOG_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRILOG_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Const function to parse u64 at compile time
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    if bytes.is_empty() {
        None
    } else {
        Some(result)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{NAME} v{VERSION} (build #{BUILD_NUMBER}, {BUILD_TIMESTAMP})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u64() {
        assert_eq!(parse_u64("0"), Some(0));
        assert_eq!(parse_u64("1234"), Some(1234));
        assert_eq!(parse_u64(""), None);
        assert_eq!(parse_u64("12a"), None);
    }
}
