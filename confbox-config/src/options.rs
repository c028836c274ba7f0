//! Integer codes for enumerated settings.
//!
//! Enumerated settings are stored as plain integers so that a radio group
//! can map each button to one value. The codes are part of the saved
//! session format and must not be renumbered.

use crate::keys::ConfKey;

// Tri-state switches
pub const FORCE_ON: i32 = 0;
pub const FORCE_OFF: i32 = 1;
pub const AUTO: i32 = 2;

// Protocols
pub const PROT_RAW: i32 = 0;
pub const PROT_TELNET: i32 = 1;
pub const PROT_RLOGIN: i32 = 2;
pub const PROT_SSH: i32 = 3;
pub const PROT_SERIAL: i32 = 4;
pub const PROT_CYGTERM: i32 = 5;

// Session logging
pub const LGTYP_NONE: i32 = 0;
pub const LGTYP_ASCII: i32 = 1;
pub const LGTYP_DEBUG: i32 = 2;
pub const LGTYP_PACKETS: i32 = 3;
pub const LGTYP_SSHRAW: i32 = 4;

// What to do when the log file exists
pub const LGXF_OVR: i32 = 1;
pub const LGXF_APN: i32 = 0;
pub const LGXF_ASK: i32 = -1;

// Bell styles
pub const BELL_DISABLED: i32 = 0;
pub const BELL_DEFAULT: i32 = 1;
pub const BELL_VISUAL: i32 = 2;
pub const BELL_WAVEFILE: i32 = 3;
pub const BELL_PCSPEAKER: i32 = 4;

// Taskbar bell indication
pub const B_IND_DISABLED: i32 = 0;
pub const B_IND_FLASH: i32 = 1;
pub const B_IND_STEADY: i32 = 2;

// Line drawing
pub const VT_XWINDOWS: i32 = 0;
pub const VT_OEMANSI: i32 = 1;
pub const VT_OEMONLY: i32 = 2;
pub const VT_POORMAN: i32 = 3;
pub const VT_UNICODE: i32 = 4;

// Remote title query response
pub const TITLE_NONE: i32 = 0;
pub const TITLE_EMPTY: i32 = 1;
pub const TITLE_REAL: i32 = 2;

// Address family
pub const ADDRTYPE_UNSPEC: i32 = 0;
pub const ADDRTYPE_IPV4: i32 = 1;
pub const ADDRTYPE_IPV6: i32 = 2;

// Proxy types
pub const PROXY_NONE: i32 = 0;
pub const PROXY_SOCKS4: i32 = 1;
pub const PROXY_SOCKS5: i32 = 2;
pub const PROXY_HTTP: i32 = 3;
pub const PROXY_TELNET: i32 = 4;

// X11 authentication
pub const X11_MIT: i32 = 1;
pub const X11_XDM: i32 = 2;

/// Timer ticks per second for the scaled bell-overload fields.
pub const TICKSPERSEC: i32 = 1000;

const BINARY: &[i32] = &[0, 1];
const TRI_STATE: &[i32] = &[FORCE_ON, FORCE_OFF, AUTO];

/// Values a radio-bound key may hold, or `None` for keys no radio group
/// shows. Every listed value has a button in the standard dialog once the
/// bell add-on is applied.
pub fn radio_values(key: ConfKey) -> Option<&'static [i32]> {
    let values: &'static [i32] = match key {
        ConfKey::Protocol => &[PROT_RAW, PROT_TELNET, PROT_RLOGIN, PROT_SSH, PROT_SERIAL, PROT_CYGTERM],
        ConfKey::CloseOnExit | ConfKey::LocalEcho | ConfKey::LocalEdit => TRI_STATE,
        ConfKey::ProxyDns | ConfKey::ProxyLogToTerm => TRI_STATE,
        ConfKey::LogXfOvr => &[LGXF_OVR, LGXF_APN, LGXF_ASK],
        ConfKey::BkspIsDelete
        | ConfKey::RxvtHomeEnd
        | ConfKey::AppCursor
        | ConfKey::RectSelect
        | ConfKey::UsernameFromEnv
        | ConfKey::RfcEnviron
        | ConfKey::PassiveTelnet => BINARY,
        ConfKey::FunkyType => &[0, 1, 2, 3, 4, 5],
        ConfKey::Beep => &[BELL_DISABLED, BELL_DEFAULT, BELL_VISUAL, BELL_WAVEFILE, BELL_PCSPEAKER],
        ConfKey::BeepInd => &[B_IND_DISABLED, B_IND_FLASH, B_IND_STEADY],
        ConfKey::RemoteQtitleAction => &[TITLE_NONE, TITLE_EMPTY, TITLE_REAL],
        ConfKey::CursorType => &[0, 1, 2],
        ConfKey::VtMode => &[VT_UNICODE, VT_POORMAN],
        ConfKey::BoldStyle => &[1, 2, 3],
        ConfKey::AddressFamily => &[ADDRTYPE_UNSPEC, ADDRTYPE_IPV4, ADDRTYPE_IPV6],
        ConfKey::ProxyType => &[PROXY_NONE, PROXY_SOCKS4, PROXY_SOCKS5, PROXY_HTTP, PROXY_TELNET],
        ConfKey::SshProt => &[0, 3],
        ConfKey::X11AuthType => &[X11_MIT, X11_XDM],
        _ => return None,
    };
    Some(values)
}
