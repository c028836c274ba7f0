//! Window, appearance, translation, selection and colour defaults.

use crate::charclass::DEFAULT_WORDNESS;
use crate::colour::DEFAULT_COLOURS;
use crate::conf::Conf;
use crate::keys::ConfKey;
use crate::options::VT_UNICODE;
use crate::value::FontSpec;

pub(super) fn apply(conf: &mut Conf) {
    conf.set_int(ConfKey::Width, 80);
    conf.set_int(ConfKey::Height, 24);
    conf.set_int(ConfKey::SaveLines, 2000);
    conf.set_bool(ConfKey::Scrollbar, true);
    conf.set_bool(ConfKey::ScrollOnKey, false);
    conf.set_bool(ConfKey::ScrollOnDisp, true);
    conf.set_bool(ConfKey::EraseToScrollback, true);

    conf.set_int(ConfKey::CursorType, 0);
    conf.set_bool(ConfKey::BlinkCur, false);
    conf.set_fontspec(ConfKey::Font, FontSpec::default());
    conf.set_bool(ConfKey::HideMousePtr, false);
    conf.set_int(ConfKey::WindowBorder, 1);

    conf.set_str(ConfKey::WinTitle, "");
    conf.set_bool(ConfKey::WinNameAlways, true);
    conf.set_bool(ConfKey::WarnOnClose, true);

    conf.set_str(ConfKey::LineCodepage, "UTF-8");
    conf.set_bool(ConfKey::CjkAmbigWide, false);
    conf.set_int(ConfKey::VtMode, VT_UNICODE);
    conf.set_bool(ConfKey::RawCnpCopy, false);

    conf.set_bool(ConfKey::MouseOverride, true);
    conf.set_int(ConfKey::MouseIsXterm, 0);
    conf.set_int(ConfKey::RectSelect, 0);
    conf.set_int_list(ConfKey::Wordness, DEFAULT_WORDNESS.to_vec());

    conf.set_bool(ConfKey::AnsiColour, true);
    conf.set_bool(ConfKey::Xterm256Colour, true);
    conf.set_int(ConfKey::BoldStyle, 2);
    conf.set_int_list(
        ConfKey::Colours,
        DEFAULT_COLOURS.iter().flatten().copied().collect(),
    );
}
