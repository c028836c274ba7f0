//! Ordered preference lists.
//!
//! A preference list stores every member of a closed algorithm enumeration
//! exactly once, in the user's order. The dialog shows the members that have
//! a display name and lets the user drag them around; [`merge_reordered`]
//! folds the widget's new order back into the stored list without losing
//! the members it never showed.

use std::collections::HashSet;

use crate::error::PreferenceError;
use crate::keys::ConfKey;

// Cipher identifiers
pub const CIPHER_WARN: i32 = 0;
pub const CIPHER_3DES: i32 = 1;
pub const CIPHER_BLOWFISH: i32 = 2;
pub const CIPHER_AES: i32 = 3;
pub const CIPHER_DES: i32 = 4;
pub const CIPHER_ARCFOUR: i32 = 5;
pub const CIPHER_CHACHA20: i32 = 6;
pub const CIPHER_MAX: usize = 7;

// Key-exchange identifiers
pub const KEX_WARN: i32 = 0;
pub const KEX_DHGROUP1: i32 = 1;
pub const KEX_DHGROUP14: i32 = 2;
pub const KEX_DHGEX: i32 = 3;
pub const KEX_RSA: i32 = 4;
pub const KEX_ECDH: i32 = 5;
pub const KEX_MAX: usize = 6;

// Host-key algorithm identifiers
pub const HK_WARN: i32 = 0;
pub const HK_RSA: i32 = 1;
pub const HK_DSA: i32 = 2;
pub const HK_ECDSA: i32 = 3;
pub const HK_ED25519: i32 = 4;
pub const HK_MAX: usize = 5;

/// GSSAPI library choices, indexed by identifier.
pub const GSS_LIBRARY_NAMES: [&str; 4] = [
    "libgssapi (Heimdal)",
    "libgssapi_krb5 (MIT Kerberos)",
    "libgss (Sun)",
    "User-specified GSSAPI library",
];

/// Label of the divider row below which algorithms trigger a warning.
pub const WARN_LABEL: &str = "-- warn below here --";

const CIPHER_NAMES: &[(i32, &str)] = &[
    (CIPHER_CHACHA20, "ChaCha20 (SSH-2 only)"),
    (CIPHER_3DES, "3DES"),
    (CIPHER_BLOWFISH, "Blowfish"),
    (CIPHER_DES, "DES"),
    (CIPHER_AES, "AES (SSH-2 only)"),
    (CIPHER_ARCFOUR, "Arcfour (SSH-2 only)"),
    (CIPHER_WARN, WARN_LABEL),
];

const KEX_NAMES: &[(i32, &str)] = &[
    (KEX_DHGROUP1, "Diffie-Hellman group 1"),
    (KEX_DHGROUP14, "Diffie-Hellman group 14"),
    (KEX_DHGEX, "Diffie-Hellman group exchange"),
    (KEX_RSA, "RSA-based key exchange"),
    (KEX_ECDH, "ECDH key exchange"),
    (KEX_WARN, WARN_LABEL),
];

const HOSTKEY_NAMES: &[(i32, &str)] = &[
    (HK_ED25519, "Ed25519"),
    (HK_ECDSA, "ECDSA"),
    (HK_DSA, "DSA"),
    (HK_RSA, "RSA"),
    (HK_WARN, WARN_LABEL),
];

/// Which preference enumeration a list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    Cipher,
    Kex,
    HostKey,
    GssLib,
}

impl PreferenceKind {
    /// Number of members in the enumeration, and so the stored list length.
    pub const fn cardinality(self) -> usize {
        match self {
            PreferenceKind::Cipher => CIPHER_MAX,
            PreferenceKind::Kex => KEX_MAX,
            PreferenceKind::HostKey => HK_MAX,
            PreferenceKind::GssLib => GSS_LIBRARY_NAMES.len(),
        }
    }

    /// The configuration key the list is stored under.
    pub fn key(self) -> ConfKey {
        match self {
            PreferenceKind::Cipher => ConfKey::SshCipherList,
            PreferenceKind::Kex => ConfKey::SshKexList,
            PreferenceKind::HostKey => ConfKey::SshHkList,
            PreferenceKind::GssLib => ConfKey::SshGssList,
        }
    }

    /// Display name of identifier `id`, or `None` if this build has no row
    /// for it (a reserved or withdrawn algorithm).
    pub fn display_name(self, id: i32) -> Option<&'static str> {
        let table = match self {
            PreferenceKind::Cipher => CIPHER_NAMES,
            PreferenceKind::Kex => KEX_NAMES,
            PreferenceKind::HostKey => HOSTKEY_NAMES,
            PreferenceKind::GssLib => {
                return usize::try_from(id)
                    .ok()
                    .and_then(|i| GSS_LIBRARY_NAMES.get(i).copied());
            }
        };
        table.iter().find(|(k, _)| *k == id).map(|(_, s)| *s)
    }

    /// The shipped default order.
    pub fn default_order(self) -> Vec<i32> {
        match self {
            PreferenceKind::Cipher => vec![
                CIPHER_AES,
                CIPHER_CHACHA20,
                CIPHER_3DES,
                CIPHER_WARN,
                CIPHER_DES,
                CIPHER_BLOWFISH,
                CIPHER_ARCFOUR,
            ],
            PreferenceKind::Kex => vec![
                KEX_ECDH,
                KEX_DHGEX,
                KEX_DHGROUP14,
                KEX_RSA,
                KEX_WARN,
                KEX_DHGROUP1,
            ],
            PreferenceKind::HostKey => vec![HK_ED25519, HK_ECDSA, HK_RSA, HK_DSA, HK_WARN],
            PreferenceKind::GssLib => (0..GSS_LIBRARY_NAMES.len() as i32).collect(),
        }
    }
}

/// Check that `list` holds each member of `kind` exactly once.
pub fn check_permutation(kind: PreferenceKind, list: &[i32]) -> Result<(), PreferenceError> {
    let expected = kind.cardinality();
    if list.len() != expected {
        return Err(PreferenceError::LengthMismatch {
            expected,
            actual: list.len(),
        });
    }
    let mut seen = HashSet::with_capacity(expected);
    for &id in list {
        if id < 0 || id as usize >= expected {
            return Err(PreferenceError::UnknownId(id));
        }
        if !seen.insert(id) {
            return Err(PreferenceError::Duplicate(id));
        }
    }
    Ok(())
}

/// Fold a reordered set of visible rows back into a stored list.
///
/// Identifiers in `stored` that do not appear in `visible` stay in their
/// slots. The remaining slots are filled with `visible` in order. Every
/// visible identifier must come from `stored`, and none may repeat.
pub fn merge_reordered(stored: &[i32], visible: &[i32]) -> Result<Vec<i32>, PreferenceError> {
    let stored_set: HashSet<i32> = stored.iter().copied().collect();
    let mut shown = HashSet::with_capacity(visible.len());
    for &id in visible {
        if !stored_set.contains(&id) {
            return Err(PreferenceError::UnknownId(id));
        }
        if !shown.insert(id) {
            return Err(PreferenceError::Duplicate(id));
        }
    }

    let mut next = visible.iter();
    let merged: Vec<i32> = stored
        .iter()
        .map(|&id| {
            if shown.contains(&id) {
                // Counts match: each shown id occupies exactly one stored slot.
                next.next().copied().unwrap_or(id)
            } else {
                id
            }
        })
        .collect();

    if merged.len() != stored.len() {
        return Err(PreferenceError::LengthMismatch {
            expected: stored.len(),
            actual: merged.len(),
        });
    }
    Ok(merged)
}
