//! The device names Windows refuses to treat as ordinary files.

use std::ffi::OsStr;

/// Reserved device names, lowercase. Matching is ASCII case-insensitive.
pub const RESERVED_NAMES: [&str; 22] = [
    "nul", "con", "prn", "aux", //
    "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8", "com9", //
    "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Returns true if `file_name` names a reserved device.
///
/// The extension is ignored: `NUL.txt` and `com1.tar.gz` both match, because
/// Windows resolves everything before the first dot. Never allocates.
pub fn is_reserved_name(file_name: &OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    let stem = match bytes.iter().position(|&b| b == b'.') {
        Some(dot) => &bytes[..dot],
        None => bytes,
    };

    match stem.len() {
        3 => RESERVED_NAMES[..4]
            .iter()
            .any(|name| stem.eq_ignore_ascii_case(name.as_bytes())),
        4 => {
            // comN / lptN share one shape: three letters then 1-9
            matches!(stem[3], b'1'..=b'9')
                && (stem[..3].eq_ignore_ascii_case(b"com") || stem[..3].eq_ignore_ascii_case(b"lpt"))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserved(name: &str) -> bool {
        is_reserved_name(OsStr::new(name))
    }

    #[test]
    fn test_table_has_all_names() {
        assert_eq!(RESERVED_NAMES.len(), 22);
        assert!(RESERVED_NAMES.contains(&"nul"));
        assert!(RESERVED_NAMES.contains(&"con"));
        assert!(RESERVED_NAMES.contains(&"prn"));
        assert!(RESERVED_NAMES.contains(&"aux"));
        assert!(RESERVED_NAMES.contains(&"com9"));
        assert!(RESERVED_NAMES.contains(&"lpt1"));
    }

    #[test]
    fn test_every_name_matches() {
        for name in RESERVED_NAMES {
            assert!(reserved(name), "{name} should match");
            assert!(reserved(&name.to_ascii_uppercase()), "{name} uppercase should match");
        }
    }

    #[test]
    fn test_mixed_case() {
        for name in ["nul", "NUL", "Nul", "nUL", "nuL", "NuL", "Com7", "lPt3", "AUX"] {
            assert!(reserved(name), "{name} should match");
        }
    }

    #[test]
    fn test_extension_ignored() {
        assert!(reserved("nul.txt"));
        assert!(reserved("CON.log"));
        assert!(reserved("com1.tar.gz"));
        assert!(reserved("aux."));
    }

    #[test]
    fn test_non_reserved() {
        for name in [
            "", "nu", "null", "nul_", "console", "com0", "com10", "lpt", "lpt0", "lptx",
            ".nul", "my.nul", "readme.txt", "prnt", "auxiliary",
        ] {
            assert!(!reserved(name), "{name:?} should not match");
        }
    }
}
