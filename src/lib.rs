// Library exports for the confbox binary and the integration tests.
//
// The dialog itself lives in `confbox-settings-ui`; this crate supplies the
// collaborators it needs on a real system (file storage, backends, host-key
// and codepage helpers) and a headless command-line front end over it.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod editor;
pub mod services;
pub mod session_store;

pub use editor::{EditError, SessionEditor};
pub use services::{ManualHostKeys, NoPrinters, StaticBackends, StaticCodepages, default_services};
pub use session_store::FileSessionStorage;
