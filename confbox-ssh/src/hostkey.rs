//! Validation of manually configured host keys.
//!
//! A manual host key can be given three ways:
//! - an MD5 fingerprint: 16 colon-separated hex pairs, optionally prefixed
//!   with `MD5:`
//! - a SHA-256 fingerprint: `SHA256:` followed by 43 unpadded base64 chars
//! - a public-key blob in base64, optionally preceded by its algorithm name
//!   and followed by a comment, as in an `authorized_keys` line
//!
//! Valid input is reduced to a canonical form, so the same key typed two
//! ways is stored once.

use base64::Engine as _;
use regex::Regex;
use std::sync::OnceLock;

static MD5_REGEX: OnceLock<Regex> = OnceLock::new();
static SHA256_REGEX: OnceLock<Regex> = OnceLock::new();
static ALGORITHM_REGEX: OnceLock<Regex> = OnceLock::new();

fn md5_regex() -> &'static Regex {
    MD5_REGEX.get_or_init(|| {
        Regex::new(r"^(?i:MD5:)?((?:[0-9A-Fa-f]{2}:){15}[0-9A-Fa-f]{2})$")
            .expect("Failed to compile MD5 fingerprint regex")
    })
}

fn sha256_regex() -> &'static Regex {
    SHA256_REGEX.get_or_init(|| {
        Regex::new(r"^SHA256:[A-Za-z0-9+/]{43}$")
            .expect("Failed to compile SHA256 fingerprint regex")
    })
}

fn algorithm_regex() -> &'static Regex {
    ALGORITHM_REGEX.get_or_init(|| {
        // ssh-rsa, ecdsa-sha2-nistp256, ssh-ed25519, foo@example.com
        Regex::new(r"^[a-z0-9][a-z0-9.-]*(?:@[a-z0-9.-]+)?$")
            .expect("Failed to compile key algorithm regex")
    })
}

/// Canonical form of a manual host key, or `None` if `text` is not in any
/// accepted format.
///
/// MD5 fingerprints become lowercase without the `MD5:` prefix. SHA-256
/// fingerprints are kept as typed. Key blobs are reduced to the base64 blob.
pub fn validate_manual_hostkey(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = md5_regex().captures(text) {
        return Some(caps[1].to_ascii_lowercase());
    }
    if sha256_regex().is_match(text) {
        return Some(text.to_string());
    }

    let mut words = text.split_whitespace();
    let first = words.next()?;
    let (named_algorithm, blob) = if algorithm_regex().is_match(first) {
        (Some(first), words.next()?)
    } else {
        (None, first)
    };

    let embedded = blob_algorithm(blob)?;
    if let Some(named) = named_algorithm
        && named != embedded
    {
        log::debug!("Host key algorithm {named} does not match blob algorithm {embedded}");
        return None;
    }
    Some(blob.to_string())
}

/// Decode a public-key blob and return the algorithm name it starts with.
fn blob_algorithm(blob: &str) -> Option<String> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(blob).ok()?;
    let len_bytes: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    let len = u32::from_be_bytes(len_bytes) as usize;
    let name = bytes.get(4..4usize.checked_add(len)?)?;
    let name = std::str::from_utf8(name).ok()?;
    if algorithm_regex().is_match(name) {
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob_for(algorithm: &str) -> String {
        let mut bytes = (algorithm.len() as u32).to_be_bytes().to_vec();
        bytes.extend_from_slice(algorithm.as_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 1, 0x23]);
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn test_md5_fingerprint() {
        let fp = "AA:bb:cc:dd:ee:ff:00:11:22:33:44:55:66:77:88:99";
        let canonical = "aa:bb:cc:dd:ee:ff:00:11:22:33:44:55:66:77:88:99";
        assert_eq!(validate_manual_hostkey(fp).as_deref(), Some(canonical));
        assert_eq!(
            validate_manual_hostkey(&format!("MD5:{fp}")).as_deref(),
            Some(canonical)
        );
        assert_eq!(validate_manual_hostkey("aa:bb:cc"), None);
    }

    #[test]
    fn test_sha256_fingerprint() {
        let fp = "SHA256:47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU";
        assert_eq!(validate_manual_hostkey(fp).as_deref(), Some(fp));
        assert_eq!(validate_manual_hostkey("SHA256:short"), None);
    }

    #[test]
    fn test_key_blob_forms() {
        let blob = blob_for("ssh-ed25519");
        assert_eq!(validate_manual_hostkey(&blob).as_deref(), Some(blob.as_str()));

        let line = format!("ssh-ed25519 {blob} user@host");
        assert_eq!(validate_manual_hostkey(&line).as_deref(), Some(blob.as_str()));

        let mismatched = format!("ssh-rsa {blob}");
        assert_eq!(validate_manual_hostkey(&mismatched), None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(validate_manual_hostkey(""), None);
        assert_eq!(validate_manual_hostkey("not a key"), None);
        assert_eq!(validate_manual_hostkey("!!!!"), None);
    }
}
