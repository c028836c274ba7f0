//! Default values for a new configuration.
//!
//! Each sub-module seeds one group of panels. [`populate`] runs them all and
//! is what `Conf::default()` uses, so every key has a value before a saved
//! session is overlaid on top.

mod connection;
mod session;
mod ssh;
mod terminal;
mod window;

use crate::conf::Conf;

pub use session::{DEFAULT_PROTOCOL, DEFAULT_TERM_TYPE};

/// Fill `conf` with the shipped defaults for every key.
pub fn populate(conf: &mut Conf) {
    session::apply(conf);
    terminal::apply(conf);
    window::apply(conf);
    connection::apply(conf);
    ssh::apply(conf);
}
