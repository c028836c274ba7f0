//! Terminal, keyboard, bell and feature defaults.

use crate::conf::Conf;
use crate::keys::ConfKey;
use crate::options::{AUTO, B_IND_DISABLED, BELL_DEFAULT, TICKSPERSEC, TITLE_EMPTY};
use crate::value::Filename;

pub(super) fn apply(conf: &mut Conf) {
    conf.set_bool(ConfKey::WrapMode, true);
    conf.set_bool(ConfKey::DecOm, false);
    conf.set_bool(ConfKey::LfHasCr, false);
    conf.set_bool(ConfKey::CrImplicitLf, false);
    conf.set_bool(ConfKey::BceErase, true);
    conf.set_bool(ConfKey::BlinkText, false);
    conf.set_str(ConfKey::Answerback, "PuTTY");
    conf.set_int(ConfKey::LocalEcho, AUTO);
    conf.set_int(ConfKey::LocalEdit, AUTO);
    conf.set_str(ConfKey::Printer, "");

    conf.set_int(ConfKey::BkspIsDelete, 1);
    conf.set_int(ConfKey::RxvtHomeEnd, 0);
    conf.set_int(ConfKey::FunkyType, 0);
    conf.set_int(ConfKey::AppCursor, 0);
    conf.set_bool(ConfKey::AppKeypad, false);
    conf.set_bool(ConfKey::NethackKeypad, false);
    conf.set_bool(ConfKey::ComposeKey, false);
    conf.set_bool(ConfKey::CtrlAltKeys, true);

    conf.set_int(ConfKey::Beep, BELL_DEFAULT);
    conf.set_int(ConfKey::BeepInd, B_IND_DISABLED);
    conf.set_filename(ConfKey::BellWavefile, Filename::default());
    conf.set_bool(ConfKey::BellOvl, true);
    conf.set_int(ConfKey::BellOvlN, 5);
    conf.set_int(ConfKey::BellOvlT, 2 * TICKSPERSEC);
    conf.set_int(ConfKey::BellOvlS, 5 * TICKSPERSEC);

    for key in [
        ConfKey::NoApplicCursor,
        ConfKey::NoApplicKeypad,
        ConfKey::NoMouseRep,
        ConfKey::NoRemoteResize,
        ConfKey::NoAltScreen,
        ConfKey::NoRemoteWintitle,
        ConfKey::NoRemoteClearScroll,
        ConfKey::NoDbackspace,
        ConfKey::NoRemoteCharset,
        ConfKey::ArabicShaping,
        ConfKey::Bidi,
    ] {
        conf.set_bool(key, false);
    }
    conf.set_int(ConfKey::RemoteQtitleAction, TITLE_EMPTY);
}
