//! Backend table: which protocols are built in, their default ports, and
//! whether a configuration has enough in it to start a connection.

use confbox_config::options::{
    PROT_CYGTERM, PROT_RAW, PROT_RLOGIN, PROT_SERIAL, PROT_SSH, PROT_TELNET,
};
use confbox_config::{Conf, ConfKey};

/// One connection backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backend {
    /// Short name, as used on the command line
    pub name: &'static str,
    /// Protocol code stored in the `Protocol` key
    pub protocol: i32,
    /// Port used when the user has not chosen one; 0 means no sensible value
    pub default_port: i32,
}

pub const SSH_BACKEND: Backend = Backend {
    name: "ssh",
    protocol: PROT_SSH,
    default_port: 22,
};
pub const TELNET_BACKEND: Backend = Backend {
    name: "telnet",
    protocol: PROT_TELNET,
    default_port: 23,
};
pub const RLOGIN_BACKEND: Backend = Backend {
    name: "rlogin",
    protocol: PROT_RLOGIN,
    default_port: 513,
};
pub const RAW_BACKEND: Backend = Backend {
    name: "raw",
    protocol: PROT_RAW,
    default_port: 0,
};
pub const SERIAL_BACKEND: Backend = Backend {
    name: "serial",
    protocol: PROT_SERIAL,
    default_port: 0,
};
pub const CYGTERM_BACKEND: Backend = Backend {
    name: "cygterm",
    protocol: PROT_CYGTERM,
    default_port: 0,
};

/// The set of backends compiled into a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendTable {
    backends: Vec<Backend>,
}

impl Default for BackendTable {
    fn default() -> Self {
        Self::full()
    }
}

impl BackendTable {
    /// Every backend except Cygterm.
    pub fn full() -> Self {
        Self {
            backends: vec![
                SSH_BACKEND,
                TELNET_BACKEND,
                RLOGIN_BACKEND,
                RAW_BACKEND,
                SERIAL_BACKEND,
            ],
        }
    }

    /// A Telnet-only client build: no SSH.
    pub fn without_ssh() -> Self {
        Self {
            backends: vec![TELNET_BACKEND, RLOGIN_BACKEND, RAW_BACKEND, SERIAL_BACKEND],
        }
    }

    /// Add a backend, replacing any with the same protocol code.
    pub fn with(mut self, backend: Backend) -> Self {
        self.backends.retain(|b| b.protocol != backend.protocol);
        self.backends.push(backend);
        self
    }

    pub fn from_proto(&self, protocol: i32) -> Option<&Backend> {
        self.backends.iter().find(|b| b.protocol == protocol)
    }

    pub fn from_name(&self, name: &str) -> Option<&Backend> {
        self.backends
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Backend> {
        self.backends.iter()
    }
}

/// Whether `conf` names something to connect to for its protocol: a serial
/// line for serial, a command for Cygterm, a host name for everything else.
pub fn is_launchable(conf: &Conf) -> bool {
    let field = match conf.get_int(ConfKey::Protocol) {
        PROT_SERIAL => ConfKey::SerLine,
        PROT_CYGTERM => ConfKey::CygCmd,
        _ => ConfKey::Host,
    };
    !conf.get_str(field).is_empty()
}
