//! Session and logging defaults.

use crate::conf::Conf;
use crate::keys::ConfKey;
use crate::options::{AUTO, LGTYP_NONE, LGXF_ASK, PROT_SSH};
use crate::value::Filename;

pub const DEFAULT_PROTOCOL: i32 = PROT_SSH;
pub const DEFAULT_TERM_TYPE: &str = "xterm";

pub(super) fn apply(conf: &mut Conf) {
    conf.set_str(ConfKey::Host, "");
    conf.set_int(ConfKey::Port, 22);
    conf.set_int(ConfKey::Protocol, DEFAULT_PROTOCOL);
    conf.set_str(ConfKey::SerLine, default_serial_line());
    conf.set_int(ConfKey::SerSpeed, 9600);
    conf.set_str(ConfKey::CygCmd, "-");
    conf.set_int(ConfKey::CloseOnExit, AUTO);

    conf.set_int(ConfKey::LogType, LGTYP_NONE);
    conf.set_filename(ConfKey::LogFilename, Filename::new("putty.log"));
    conf.set_int(ConfKey::LogXfOvr, LGXF_ASK);
    conf.set_bool(ConfKey::LogFlush, true);
    conf.set_bool(ConfKey::LogOmitPasswords, true);
    conf.set_bool(ConfKey::LogOmitData, false);
}

fn default_serial_line() -> &'static str {
    if cfg!(windows) { "COM1" } else { "/dev/ttyS0" }
}
