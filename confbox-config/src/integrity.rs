//! Integrity faults.
//!
//! Some tables are exhaustive by construction: a radio group lists every
//! value its key can take, and a preference list is a permutation of its
//! enumeration. When one of those turns out not to hold, carrying on would
//! silently corrupt the user's saved settings, so execution stops here.

use std::fmt;

/// Log and stop on a broken construction-time guarantee.
#[track_caller]
pub fn integrity_fault(msg: impl fmt::Display) -> ! {
    log::error!("Integrity fault: {msg}");
    panic!("integrity fault: {msg}");
}
