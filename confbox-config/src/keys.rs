//! Configuration keys and the value kind bound to each of them.
//!
//! Every [`ConfKey`] has exactly one [`ValueKind`] for its whole lifetime.
//! The store enforces this: reading or writing a key through an accessor of
//! the wrong kind is an integrity fault, and loading a session file whose
//! entry has the wrong kind is a validation error.

use serde::{Deserialize, Serialize};

/// Number of colour slots in the colour table.
pub const NCOLOURS: usize = 22;

/// Number of character-class slots (one per 7-bit character code).
pub const NCHARCLASSES: usize = 128;

/// The kind of value stored under a [`ConfKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A plain integer (also used for booleans and enumerations)
    Int,
    /// A UTF-8 string
    Str,
    /// A file path
    Filename,
    /// A font specification
    Font,
    /// A fixed-length list of integers indexed by position
    IntList(usize),
    /// An ordered string-keyed sub-map (a compound setting)
    StrMap,
}

/// Identifier of one scalar or compound setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfKey {
    // Session
    Host,
    Port,
    Protocol,
    SerLine,
    SerSpeed,
    CygCmd,
    CloseOnExit,

    // Logging
    LogType,
    LogFilename,
    LogXfOvr,
    LogFlush,
    LogOmitPasswords,
    LogOmitData,

    // Terminal
    WrapMode,
    DecOm,
    LfHasCr,
    CrImplicitLf,
    BceErase,
    BlinkText,
    Answerback,
    LocalEcho,
    LocalEdit,
    Printer,

    // Keyboard
    BkspIsDelete,
    RxvtHomeEnd,
    FunkyType,
    AppCursor,
    AppKeypad,
    NethackKeypad,
    ComposeKey,
    CtrlAltKeys,

    // Bell
    Beep,
    BeepInd,
    BellWavefile,
    BellOvl,
    BellOvlN,
    BellOvlT,
    BellOvlS,

    // Features
    NoApplicCursor,
    NoApplicKeypad,
    NoMouseRep,
    NoRemoteResize,
    NoAltScreen,
    NoRemoteWintitle,
    NoRemoteClearScroll,
    RemoteQtitleAction,
    NoDbackspace,
    NoRemoteCharset,
    ArabicShaping,
    Bidi,

    // Window
    Width,
    Height,
    SaveLines,
    Scrollbar,
    ScrollOnKey,
    ScrollOnDisp,
    EraseToScrollback,

    // Appearance
    CursorType,
    BlinkCur,
    Font,
    HideMousePtr,
    WindowBorder,

    // Behaviour
    WinTitle,
    WinNameAlways,
    WarnOnClose,

    // Translation
    LineCodepage,
    CjkAmbigWide,
    VtMode,
    RawCnpCopy,

    // Selection
    MouseOverride,
    MouseIsXterm,
    RectSelect,
    Wordness,

    // Colours
    AnsiColour,
    Xterm256Colour,
    BoldStyle,
    Colours,

    // Connection
    PingInterval,
    TcpNoDelay,
    TcpKeepalives,
    AddressFamily,
    LoghostName,

    // Connection/Data
    Username,
    UsernameFromEnv,
    TermType,
    TermSpeed,
    Environment,

    // Connection/Proxy
    ProxyType,
    ProxyHost,
    ProxyPort,
    ProxyExcludeList,
    EvenProxyLocalhost,
    ProxyDns,
    ProxyUsername,
    ProxyPassword,
    ProxyTelnetCommand,
    ProxyLogToTerm,

    // Connection/Telnet
    RfcEnviron,
    PassiveTelnet,
    TelnetKeyboard,
    TelnetNewline,

    // Connection/Rlogin
    LocalUsername,

    // Connection/SSH
    RemoteCmd,
    SshNoShell,
    Compression,
    SshConnectionSharing,
    SshConnectionSharingUpstream,
    SshConnectionSharingDownstream,
    SshProt,
    SshKexList,
    SshRekeyTime,
    SshRekeyData,
    SshHkList,
    SshManualHostkeys,
    SshHostkeyCheck,
    SshCipherList,
    Ssh2Des,

    // Connection/SSH/Auth
    SshShowBanner,
    SshNoUserauth,
    TryAgent,
    TryTis,
    TryKi,
    AgentFwd,
    ChangeUsername,
    KeyFile,
    TryGssAuth,
    GssFwdTgt,
    SshGssList,
    SshGssCustom,

    // Connection/SSH/TTY
    NoPty,
    TtyModes,

    // Connection/SSH/X11
    X11Forward,
    X11Display,
    X11AuthType,
    XauthFile,

    // Connection/SSH/Tunnels
    LportAcceptAll,
    RportAcceptAll,
    PortFwd,

    // Connection/SSH/Bugs
    SshBugIgnore1,
    SshBugPlainpw1,
    SshBugRsa1,
    SshBugIgnore2,
    SshBugHmac2,
    SshBugDerivekey2,
    SshBugRsapad2,
    SshBugPksessid2,
    SshBugRekey2,
    SshBugMaxpkt2,
    SshBugOldgex2,
    SshBugWinadj,
    SshBugChanreq,

    // Cygterm
    CygAutoPath,
    Cygterm64,
}

impl ConfKey {
    /// All keys, in declaration order.
    pub const ALL: &'static [ConfKey] = &[
        ConfKey::Host,
        ConfKey::Port,
        ConfKey::Protocol,
        ConfKey::SerLine,
        ConfKey::SerSpeed,
        ConfKey::CygCmd,
        ConfKey::CloseOnExit,
        ConfKey::LogType,
        ConfKey::LogFilename,
        ConfKey::LogXfOvr,
        ConfKey::LogFlush,
        ConfKey::LogOmitPasswords,
        ConfKey::LogOmitData,
        ConfKey::WrapMode,
        ConfKey::DecOm,
        ConfKey::LfHasCr,
        ConfKey::CrImplicitLf,
        ConfKey::BceErase,
        ConfKey::BlinkText,
        ConfKey::Answerback,
        ConfKey::LocalEcho,
        ConfKey::LocalEdit,
        ConfKey::Printer,
        ConfKey::BkspIsDelete,
        ConfKey::RxvtHomeEnd,
        ConfKey::FunkyType,
        ConfKey::AppCursor,
        ConfKey::AppKeypad,
        ConfKey::NethackKeypad,
        ConfKey::ComposeKey,
        ConfKey::CtrlAltKeys,
        ConfKey::Beep,
        ConfKey::BeepInd,
        ConfKey::BellWavefile,
        ConfKey::BellOvl,
        ConfKey::BellOvlN,
        ConfKey::BellOvlT,
        ConfKey::BellOvlS,
        ConfKey::NoApplicCursor,
        ConfKey::NoApplicKeypad,
        ConfKey::NoMouseRep,
        ConfKey::NoRemoteResize,
        ConfKey::NoAltScreen,
        ConfKey::NoRemoteWintitle,
        ConfKey::NoRemoteClearScroll,
        ConfKey::RemoteQtitleAction,
        ConfKey::NoDbackspace,
        ConfKey::NoRemoteCharset,
        ConfKey::ArabicShaping,
        ConfKey::Bidi,
        ConfKey::Width,
        ConfKey::Height,
        ConfKey::SaveLines,
        ConfKey::Scrollbar,
        ConfKey::ScrollOnKey,
        ConfKey::ScrollOnDisp,
        ConfKey::EraseToScrollback,
        ConfKey::CursorType,
        ConfKey::BlinkCur,
        ConfKey::Font,
        ConfKey::HideMousePtr,
        ConfKey::WindowBorder,
        ConfKey::WinTitle,
        ConfKey::WinNameAlways,
        ConfKey::WarnOnClose,
        ConfKey::LineCodepage,
        ConfKey::CjkAmbigWide,
        ConfKey::VtMode,
        ConfKey::RawCnpCopy,
        ConfKey::MouseOverride,
        ConfKey::MouseIsXterm,
        ConfKey::RectSelect,
        ConfKey::Wordness,
        ConfKey::AnsiColour,
        ConfKey::Xterm256Colour,
        ConfKey::BoldStyle,
        ConfKey::Colours,
        ConfKey::PingInterval,
        ConfKey::TcpNoDelay,
        ConfKey::TcpKeepalives,
        ConfKey::AddressFamily,
        ConfKey::LoghostName,
        ConfKey::Username,
        ConfKey::UsernameFromEnv,
        ConfKey::TermType,
        ConfKey::TermSpeed,
        ConfKey::Environment,
        ConfKey::ProxyType,
        ConfKey::ProxyHost,
        ConfKey::ProxyPort,
        ConfKey::ProxyExcludeList,
        ConfKey::EvenProxyLocalhost,
        ConfKey::ProxyDns,
        ConfKey::ProxyUsername,
        ConfKey::ProxyPassword,
        ConfKey::ProxyTelnetCommand,
        ConfKey::ProxyLogToTerm,
        ConfKey::RfcEnviron,
        ConfKey::PassiveTelnet,
        ConfKey::TelnetKeyboard,
        ConfKey::TelnetNewline,
        ConfKey::LocalUsername,
        ConfKey::RemoteCmd,
        ConfKey::SshNoShell,
        ConfKey::Compression,
        ConfKey::SshConnectionSharing,
        ConfKey::SshConnectionSharingUpstream,
        ConfKey::SshConnectionSharingDownstream,
        ConfKey::SshProt,
        ConfKey::SshKexList,
        ConfKey::SshRekeyTime,
        ConfKey::SshRekeyData,
        ConfKey::SshHkList,
        ConfKey::SshManualHostkeys,
        ConfKey::SshHostkeyCheck,
        ConfKey::SshCipherList,
        ConfKey::Ssh2Des,
        ConfKey::SshShowBanner,
        ConfKey::SshNoUserauth,
        ConfKey::TryAgent,
        ConfKey::TryTis,
        ConfKey::TryKi,
        ConfKey::AgentFwd,
        ConfKey::ChangeUsername,
        ConfKey::KeyFile,
        ConfKey::TryGssAuth,
        ConfKey::GssFwdTgt,
        ConfKey::SshGssList,
        ConfKey::SshGssCustom,
        ConfKey::NoPty,
        ConfKey::TtyModes,
        ConfKey::X11Forward,
        ConfKey::X11Display,
        ConfKey::X11AuthType,
        ConfKey::XauthFile,
        ConfKey::LportAcceptAll,
        ConfKey::RportAcceptAll,
        ConfKey::PortFwd,
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
        ConfKey::CygAutoPath,
        ConfKey::Cygterm64,
    ];

    /// The value kind bound to this key.
    pub fn kind(self) -> ValueKind {
        use ConfKey::*;
        match self {
            Host | SerLine | CygCmd | Answerback | Printer | WinTitle | LineCodepage
            | LoghostName | Username | TermType | TermSpeed | ProxyHost | ProxyExcludeList
            | ProxyUsername | ProxyPassword | ProxyTelnetCommand | LocalUsername | RemoteCmd
            | SshRekeyData | X11Display => ValueKind::Str,

            LogFilename | BellWavefile | KeyFile | SshGssCustom | XauthFile => {
                ValueKind::Filename
            }

            Font => ValueKind::Font,

            Colours => ValueKind::IntList(NCOLOURS * 3),
            Wordness => ValueKind::IntList(NCHARCLASSES),
            SshCipherList => ValueKind::IntList(crate::prefs::PreferenceKind::Cipher.cardinality()),
            SshKexList => ValueKind::IntList(crate::prefs::PreferenceKind::Kex.cardinality()),
            SshHkList => ValueKind::IntList(crate::prefs::PreferenceKind::HostKey.cardinality()),
            SshGssList => ValueKind::IntList(crate::prefs::PreferenceKind::GssLib.cardinality()),

            Environment | TtyModes | PortFwd | SshManualHostkeys => ValueKind::StrMap,

            _ => ValueKind::Int,
        }
    }
}

impl std::fmt::Display for ConfKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_keys_unique() {
        let set: HashSet<_> = ConfKey::ALL.iter().collect();
        assert_eq!(set.len(), ConfKey::ALL.len());
    }

    #[test]
    fn test_compound_keys_are_str_maps() {
        for key in [
            ConfKey::Environment,
            ConfKey::TtyModes,
            ConfKey::PortFwd,
            ConfKey::SshManualHostkeys,
        ] {
            assert_eq!(key.kind(), ValueKind::StrMap);
        }
    }

    #[test]
    fn test_list_lengths() {
        assert_eq!(ConfKey::Colours.kind(), ValueKind::IntList(66));
        assert_eq!(ConfKey::Wordness.kind(), ValueKind::IntList(128));
        assert_eq!(ConfKey::SshCipherList.kind(), ValueKind::IntList(7));
    }
}
