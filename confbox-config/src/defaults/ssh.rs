//! SSH defaults, including the algorithm preference orders.

use crate::conf::Conf;
use crate::keys::ConfKey;
use crate::options::{AUTO, X11_MIT};
use crate::prefs::PreferenceKind;
use crate::ttymode::TTY_MODE_NAMES;
use crate::value::Filename;

pub(super) fn apply(conf: &mut Conf) {
    conf.set_str(ConfKey::RemoteCmd, "");
    conf.set_bool(ConfKey::SshNoShell, false);
    conf.set_bool(ConfKey::Compression, false);
    conf.set_bool(ConfKey::SshConnectionSharing, false);
    conf.set_bool(ConfKey::SshConnectionSharingUpstream, true);
    conf.set_bool(ConfKey::SshConnectionSharingDownstream, true);
    conf.set_int(ConfKey::SshProt, 3);
    conf.set_int(ConfKey::SshRekeyTime, 60);
    conf.set_str(ConfKey::SshRekeyData, "1G");
    conf.str_map_mut(ConfKey::SshManualHostkeys).clear();
    conf.set_bool(ConfKey::SshHostkeyCheck, false);
    conf.set_bool(ConfKey::Ssh2Des, false);

    for kind in [
        PreferenceKind::Cipher,
        PreferenceKind::Kex,
        PreferenceKind::HostKey,
        PreferenceKind::GssLib,
    ] {
        conf.set_int_list(kind.key(), kind.default_order());
    }

    conf.set_bool(ConfKey::SshShowBanner, true);
    conf.set_bool(ConfKey::SshNoUserauth, false);
    conf.set_bool(ConfKey::TryAgent, true);
    conf.set_bool(ConfKey::TryTis, false);
    conf.set_bool(ConfKey::TryKi, true);
    conf.set_bool(ConfKey::AgentFwd, false);
    conf.set_bool(ConfKey::ChangeUsername, false);
    conf.set_filename(ConfKey::KeyFile, Filename::default());
    conf.set_bool(ConfKey::TryGssAuth, true);
    conf.set_bool(ConfKey::GssFwdTgt, false);
    conf.set_filename(ConfKey::SshGssCustom, Filename::default());

    conf.set_bool(ConfKey::NoPty, false);
    let modes = conf.str_map_mut(ConfKey::TtyModes);
    for mode in TTY_MODE_NAMES {
        modes.insert(*mode, "A");
    }

    conf.set_bool(ConfKey::X11Forward, false);
    conf.set_str(ConfKey::X11Display, "");
    conf.set_int(ConfKey::X11AuthType, X11_MIT);
    conf.set_filename(ConfKey::XauthFile, Filename::default());

    conf.set_bool(ConfKey::LportAcceptAll, false);
    conf.set_bool(ConfKey::RportAcceptAll, false);
    conf.str_map_mut(ConfKey::PortFwd).clear();

    for key in [
        ConfKey::SshBugIgnore1,
        ConfKey::SshBugPlainpw1,
        ConfKey::SshBugRsa1,
        ConfKey::SshBugIgnore2,
        ConfKey::SshBugHmac2,
        ConfKey::SshBugDerivekey2,
        ConfKey::SshBugRsapad2,
        ConfKey::SshBugPksessid2,
        ConfKey::SshBugRekey2,
        ConfKey::SshBugMaxpkt2,
        ConfKey::SshBugOldgex2,
        ConfKey::SshBugWinadj,
        ConfKey::SshBugChanreq,
    ] {
        conf.set_int(key, AUTO);
    }

    conf.set_bool(ConfKey::CygAutoPath, true);
    conf.set_bool(ConfKey::Cygterm64, false);
}
