//! Protocol backends and SSH host-key helpers for confbox.
//!
//! - [`backend`]: the built-in backend table, default ports and the
//!   launchability test
//! - [`hostkey`]: validation of manually configured host keys and
//!   fingerprints

pub mod backend;
pub mod hostkey;

pub use backend::{Backend, BackendTable, is_launchable};
pub use hostkey::validate_manual_hostkey;
