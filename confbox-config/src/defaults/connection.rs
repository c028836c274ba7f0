//! Connection, data, proxy, Telnet and Rlogin defaults.

use crate::conf::Conf;
use crate::keys::ConfKey;
use crate::options::{ADDRTYPE_UNSPEC, FORCE_OFF, AUTO, PROXY_NONE};

pub(super) fn apply(conf: &mut Conf) {
    conf.set_int(ConfKey::PingInterval, 0);
    conf.set_bool(ConfKey::TcpNoDelay, true);
    conf.set_bool(ConfKey::TcpKeepalives, false);
    conf.set_int(ConfKey::AddressFamily, ADDRTYPE_UNSPEC);
    conf.set_str(ConfKey::LoghostName, "");

    conf.set_str(ConfKey::Username, "");
    conf.set_bool(ConfKey::UsernameFromEnv, false);
    conf.set_str(ConfKey::TermType, super::DEFAULT_TERM_TYPE);
    conf.set_str(ConfKey::TermSpeed, "38400,38400");
    conf.str_map_mut(ConfKey::Environment).clear();

    conf.set_int(ConfKey::ProxyType, PROXY_NONE);
    conf.set_str(ConfKey::ProxyHost, "proxy");
    conf.set_int(ConfKey::ProxyPort, 80);
    conf.set_str(ConfKey::ProxyExcludeList, "");
    conf.set_bool(ConfKey::EvenProxyLocalhost, false);
    conf.set_int(ConfKey::ProxyDns, AUTO);
    conf.set_str(ConfKey::ProxyUsername, "");
    conf.set_str(ConfKey::ProxyPassword, "");
    conf.set_str(ConfKey::ProxyTelnetCommand, "connect %host %port\\n");
    conf.set_int(ConfKey::ProxyLogToTerm, FORCE_OFF);

    conf.set_int(ConfKey::RfcEnviron, 0);
    conf.set_bool(ConfKey::PassiveTelnet, false);
    conf.set_bool(ConfKey::TelnetKeyboard, false);
    conf.set_bool(ConfKey::TelnetNewline, true);

    conf.set_str(ConfKey::LocalUsername, "");
}
