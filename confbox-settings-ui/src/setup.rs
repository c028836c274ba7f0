//! The standard panel tree of the session dialog.
//!
//! [`setup_config_box`] builds every panel for either a new session or a
//! reconfiguration of a running one. Platform add-ons in [`crate::addons`]
//! may extend the result before it is finalized.

use confbox_config::options::*;
use confbox_config::prefs::GSS_LIBRARY_NAMES;
use confbox_config::{ConfKey, PreferenceKind};

use crate::control::{ControlId, EditField, Handler, ListBoxSpec};
use crate::controlbox::{
    CharClassControls, ColourControls, ControlBox, EnvironControls, HostKeyControls, HostPortControls,
    PortFwdControls, SessionControls, SetRef, TtyModeControls,
};
use crate::handlers::hostport::{HOST_LABEL, PORT_LABEL};
use crate::traits::BackendRegistry;

pub const APP_NAME: &str = "confbox";

/// Which dialog is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// The startup dialog that opens a new session
    NewSession,
    /// Reconfiguration of a running session. A negative protocol means a
    /// local tool with no network connection. `ssh1` marks an SSH-1 session,
    /// which cannot renegotiate its algorithms.
    MidSession { protocol: i32, ssh1: bool },
}

impl DialogMode {
    pub fn is_midsession(self) -> bool {
        matches!(self, DialogMode::MidSession { .. })
    }

    /// Protocol of the running session, if any.
    pub fn protocol(self) -> Option<i32> {
        match self {
            DialogMode::NewSession => None,
            DialogMode::MidSession { protocol, .. } => Some(protocol),
        }
    }

    fn ssh1_only(self) -> bool {
        matches!(self, DialogMode::MidSession { ssh1: true, .. })
    }
}

/// Facts about the build and the session that decide which panels exist.
struct Layout {
    mode: DialogMode,
    midsession: bool,
    ssh_available: bool,
}

impl Layout {
    fn running(&self, protocol: i32) -> bool {
        self.mode.protocol() == Some(protocol)
    }

    /// Whether SSH-specific options make sense in this dialog.
    fn ssh_relevant(&self) -> bool {
        self.ssh_available && (!self.midsession || self.running(PROT_SSH))
    }

    /// Whether the Connection panels apply at all.
    fn networked(&self) -> bool {
        self.mode.protocol().is_none_or(|p| p >= 0)
    }
}

const AUTO_ON_OFF: &[(&str, i32)] = &[("Auto", AUTO), ("Force on", FORCE_ON), ("Force off", FORCE_OFF)];
const SSH_BUG_OPTIONS: &[(&str, i32)] = &[("Auto", AUTO), ("Off", FORCE_OFF), ("On", FORCE_ON)];

fn conf_radio(b: &mut ControlBox, s: SetRef, label: &str, key: ConfKey, buttons: &[(&str, i32)]) -> ControlId {
    b.radio(s, Some(label), buttons, Handler::Radio(key))
}

fn str_field(b: &mut ControlBox, s: SetRef, label: &str, key: ConfKey) -> ControlId {
    b.conf_editbox(s, label, EditField::Str(key))
}

fn int_field(b: &mut ControlBox, s: SetRef, label: &str, key: ConfKey) -> ControlId {
    b.conf_editbox(s, label, EditField::Int(key))
}

/// Build the full panel tree for `mode`.
pub fn setup_config_box(mode: DialogMode, backends: &dyn BackendRegistry) -> ControlBox {
    let layout = Layout {
        mode,
        midsession: mode.is_midsession(),
        ssh_available: backends.is_registered(PROT_SSH),
    };
    let mut b = ControlBox::new();

    session_panels(&mut b, &layout, backends);
    terminal_panels(&mut b);
    window_panels(&mut b);
    if layout.networked() {
        connection_panels(&mut b, &layout);
    }
    if !layout.midsession {
        proxy_panel(&mut b);
    }
    if !layout.midsession || layout.running(PROT_TELNET) {
        telnet_panel(&mut b, &layout);
    }
    if !layout.midsession {
        rlogin_panel(&mut b);
    }
    if layout.ssh_relevant() {
        ssh_panels(&mut b, &layout);
    }

    log::debug!(
        "Built {} control box: {} controls in {} panels",
        if layout.midsession { "reconfiguration" } else { "new-session" },
        b.len(),
        b.panels().len()
    );
    b
}

// ============================================================================
// Session
// ============================================================================

fn session_panels(b: &mut ControlBox, layout: &Layout, backends: &dyn BackendRegistry) {
    let midsession = layout.midsession;

    // The button strip shown under every panel.
    let strip = b.getset("", "", None);
    let ok_label = if midsession { "Apply" } else { "Open" };
    let ok = b.dialog_button(strip, ok_label, true, false, Handler::SessionSaver);
    let cancel = b.dialog_button(strip, "Cancel", false, true, Handler::SessionSaver);

    b.settitle("Session", &format!("Basic options for your {APP_NAME} session"));

    if !midsession {
        let s = b.getset("Session", "hostport", Some("Specify the destination you want to connect to"));
        let host = b.editbox(s, Some(HOST_LABEL), Handler::Host);
        let port = b.editbox(s, Some(PORT_LABEL), Handler::Port);
        let mut buttons = vec![("Raw", PROT_RAW), ("Telnet", PROT_TELNET), ("Rlogin", PROT_RLOGIN)];
        if layout.ssh_available {
            buttons.push(("SSH", PROT_SSH));
        }
        if backends.is_registered(PROT_SERIAL) {
            buttons.push(("Serial", PROT_SERIAL));
        }
        b.radio(s, Some("Connection type:"), &buttons, Handler::Protocol);
        b.composites.host_port = Some(HostPortControls { host, port });
    }

    let title = if midsession {
        "Save the current session settings"
    } else {
        "Load, save or delete a stored session"
    };
    let s = b.getset("Session", "savedsessions", Some(title));
    let editbox = b.editbox(s, Some("Saved Sessions"), Handler::SessionSaver);
    let spec = ListBoxSpec {
        ncols: 1,
        height: 7,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, None, spec, Handler::SessionSaver);
    let load = (!midsession).then(|| b.button(s, "Load", Handler::SessionSaver));
    let save = b.button(s, "Save", Handler::SessionSaver);
    let delete = (!midsession).then(|| b.button(s, "Delete", Handler::SessionSaver));
    b.composites.session = Some(SessionControls {
        editbox,
        listbox,
        load,
        save,
        delete,
        ok,
        cancel,
        midsession,
    });

    let s = b.getset("Session", "otheropts", None);
    conf_radio(
        b,
        s,
        "Close window on exit:",
        ConfKey::CloseOnExit,
        &[("Always", FORCE_ON), ("Never", FORCE_OFF), ("Only on clean exit", AUTO)],
    );

    b.settitle("Session/Logging", "Options controlling session logging");
    let s = b.getset("Session/Logging", "main", None);
    let mut buttons = vec![
        ("None", LGTYP_NONE),
        ("Printable output", LGTYP_ASCII),
        ("All session output", LGTYP_DEBUG),
    ];
    if layout.ssh_relevant() {
        buttons.push(("SSH packets", LGTYP_PACKETS));
        buttons.push(("SSH packets and raw data", LGTYP_SSHRAW));
    }
    b.radio(s, Some("Session logging:"), &buttons, Handler::LoggingRadio);
    b.filesel(
        s,
        "Log file name:",
        "Select session log file name",
        true,
        Handler::FileSelect(ConfKey::LogFilename),
    );
    b.text(
        s,
        "(Log file name can contain &Y, &M, &D for date, &T for time, &H for host name, and &P for port number)",
    );
    conf_radio(
        b,
        s,
        "What to do if the log file already exists:",
        ConfKey::LogXfOvr,
        &[
            ("Always overwrite it", LGXF_OVR),
            ("Always append to the end of it", LGXF_APN),
            ("Ask the user every time", LGXF_ASK),
        ],
    );
    b.conf_checkbox(s, "Flush log file frequently", ConfKey::LogFlush);

    if layout.ssh_relevant() {
        let s = b.getset("Session/Logging", "ssh", Some("Options specific to SSH packet logging"));
        b.conf_checkbox(s, "Omit known password fields", ConfKey::LogOmitPasswords);
        b.conf_checkbox(s, "Omit session data", ConfKey::LogOmitData);
    }
}

// ============================================================================
// Terminal
// ============================================================================

fn terminal_panels(b: &mut ControlBox) {
    b.settitle("Terminal", "Options controlling the terminal emulation");
    let s = b.getset("Terminal", "general", Some("Set various terminal options"));
    b.conf_checkbox(s, "Auto wrap mode initially on", ConfKey::WrapMode);
    b.conf_checkbox(s, "DEC Origin Mode initially on", ConfKey::DecOm);
    b.conf_checkbox(s, "Implicit CR in every LF", ConfKey::LfHasCr);
    b.conf_checkbox(s, "Implicit LF in every CR", ConfKey::CrImplicitLf);
    b.conf_checkbox(s, "Use background colour to erase screen", ConfKey::BceErase);
    b.conf_checkbox(s, "Enable blinking text", ConfKey::BlinkText);
    str_field(b, s, "Answerback to ^E:", ConfKey::Answerback);

    let s = b.getset("Terminal", "ldisc", Some("Line discipline options"));
    conf_radio(b, s, "Local echo:", ConfKey::LocalEcho, AUTO_ON_OFF);
    conf_radio(b, s, "Local line editing:", ConfKey::LocalEdit, AUTO_ON_OFF);

    let s = b.getset("Terminal", "printing", Some("Remote-controlled printing"));
    b.combobox(s, "Printer to send ANSI printer output to:", Handler::Printer);

    b.settitle("Terminal/Keyboard", "Options controlling the effects of keys");
    let s = b.getset("Terminal/Keyboard", "mappings", Some("Change the sequences sent by:"));
    conf_radio(
        b,
        s,
        "The Backspace key",
        ConfKey::BkspIsDelete,
        &[("Control-H", 0), ("Control-? (127)", 1)],
    );
    conf_radio(
        b,
        s,
        "The Home and End keys",
        ConfKey::RxvtHomeEnd,
        &[("Standard", 0), ("rxvt", 1)],
    );
    conf_radio(
        b,
        s,
        "The Function keys and keypad",
        ConfKey::FunkyType,
        &[
            ("ESC[n~", 0),
            ("Linux", 1),
            ("Xterm R6", 2),
            ("VT400", 3),
            ("VT100+", 4),
            ("SCO", 5),
        ],
    );

    let s = b.getset("Terminal/Keyboard", "appkeypad", Some("Application keypad settings:"));
    conf_radio(
        b,
        s,
        "Initial state of cursor keys:",
        ConfKey::AppCursor,
        &[("Normal", 0), ("Application", 1)],
    );
    b.radio(
        s,
        Some("Initial state of numeric keypad:"),
        &[("Normal", 0), ("Application", 1), ("NetHack", 2)],
        Handler::NumericKeypad,
    );

    b.settitle("Terminal/Bell", "Options controlling the terminal bell");
    let s = b.getset("Terminal/Bell", "style", Some("Set the style of bell"));
    conf_radio(
        b,
        s,
        "Action to happen when a bell occurs:",
        ConfKey::Beep,
        &[
            ("None (bell disabled)", BELL_DISABLED),
            ("Make default system alert sound", BELL_DEFAULT),
            ("Visual bell (flash window)", BELL_VISUAL),
        ],
    );

    let s = b.getset("Terminal/Bell", "overload", Some("Control the bell overload behaviour"));
    b.conf_checkbox(s, "Bell is temporarily disabled when over-used", ConfKey::BellOvl);
    int_field(b, s, "Over-use means this many bells...", ConfKey::BellOvlN);
    b.conf_editbox(s, "... in this many seconds", EditField::Scaled(ConfKey::BellOvlT, TICKSPERSEC));
    b.text(s, "The bell is re-enabled after a few seconds of silence.");
    b.conf_editbox(s, "Seconds of silence required", EditField::Scaled(ConfKey::BellOvlS, TICKSPERSEC));

    b.settitle("Terminal/Features", "Enabling and disabling advanced terminal features");
    let s = b.getset("Terminal/Features", "main", None);
    b.conf_checkbox(s, "Disable application cursor keys mode", ConfKey::NoApplicCursor);
    b.conf_checkbox(s, "Disable application keypad mode", ConfKey::NoApplicKeypad);
    b.conf_checkbox(s, "Disable xterm-style mouse reporting", ConfKey::NoMouseRep);
    b.conf_checkbox(s, "Disable remote-controlled terminal resizing", ConfKey::NoRemoteResize);
    b.conf_checkbox(s, "Disable switching to alternate terminal screen", ConfKey::NoAltScreen);
    b.conf_checkbox(s, "Disable remote-controlled window title changing", ConfKey::NoRemoteWintitle);
    b.conf_checkbox(s, "Disable remote-controlled clearing of scrollback", ConfKey::NoRemoteClearScroll);
    conf_radio(
        b,
        s,
        "Response to remote title query (SECURITY):",
        ConfKey::RemoteQtitleAction,
        &[("None", TITLE_NONE), ("Empty string", TITLE_EMPTY), ("Window title", TITLE_REAL)],
    );
    b.conf_checkbox(s, "Disable destructive backspace on server sending ^?", ConfKey::NoDbackspace);
    b.conf_checkbox(s, "Disable remote-controlled character set configuration", ConfKey::NoRemoteCharset);
    b.conf_checkbox(s, "Disable Arabic text shaping", ConfKey::ArabicShaping);
    b.conf_checkbox(s, "Disable bidirectional text display", ConfKey::Bidi);
}

// ============================================================================
// Window
// ============================================================================

fn window_panels(b: &mut ControlBox) {
    b.settitle("Window", &format!("Options controlling {APP_NAME}'s window"));
    let s = b.getset("Window", "size", Some("Set the size of the window"));
    int_field(b, s, "Columns", ConfKey::Width);
    int_field(b, s, "Rows", ConfKey::Height);

    let s = b.getset("Window", "scrollback", Some("Control the scrollback in the window"));
    int_field(b, s, "Lines of scrollback", ConfKey::SaveLines);
    b.conf_checkbox(s, "Display scrollbar", ConfKey::Scrollbar);
    b.conf_checkbox(s, "Reset scrollback on keypress", ConfKey::ScrollOnKey);
    b.conf_checkbox(s, "Reset scrollback on display activity", ConfKey::ScrollOnDisp);
    b.conf_checkbox(s, "Push erased text into scrollback", ConfKey::EraseToScrollback);

    b.settitle("Window/Appearance", &format!("Configure the appearance of {APP_NAME}'s window"));
    let s = b.getset("Window/Appearance", "cursor", Some("Adjust the use of the cursor"));
    conf_radio(
        b,
        s,
        "Cursor appearance:",
        ConfKey::CursorType,
        &[("Block", 0), ("Underline", 1), ("Vertical line", 2)],
    );
    b.conf_checkbox(s, "Cursor blinks", ConfKey::BlinkCur);

    let s = b.getset("Window/Appearance", "font", Some("Font settings"));
    b.fontsel(s, "Font used in the terminal window", Handler::FontSelect(ConfKey::Font));

    let s = b.getset("Window/Appearance", "mouse", Some("Adjust the use of the mouse pointer"));
    b.conf_checkbox(s, "Hide mouse pointer when typing in window", ConfKey::HideMousePtr);

    let s = b.getset("Window/Appearance", "border", Some("Adjust the window border"));
    int_field(b, s, "Gap between text and window edge:", ConfKey::WindowBorder);

    b.settitle("Window/Behaviour", &format!("Configure the behaviour of {APP_NAME}'s window"));
    let s = b.getset("Window/Behaviour", "title", Some("Adjust the behaviour of the window title"));
    str_field(b, s, "Window title:", ConfKey::WinTitle);
    b.checkbox(
        s,
        "Separate window and icon titles",
        Handler::Checkbox {
            key: ConfKey::WinNameAlways,
            invert: true,
        },
    );
    let s = b.getset("Window/Behaviour", "main", None);
    b.conf_checkbox(s, "Warn before closing window", ConfKey::WarnOnClose);

    b.settitle("Window/Translation", "Options controlling character set translation");
    let s = b.getset("Window/Translation", "trans", Some("Character set translation"));
    b.combobox(s, "Remote character set:", Handler::Codepage);
    let s = b.getset("Window/Translation", "tweaks", None);
    b.conf_checkbox(s, "Treat CJK ambiguous characters as wide", ConfKey::CjkAmbigWide);
    let s = b.getset(
        "Window/Translation",
        "linedraw",
        Some(&format!("Adjust how {APP_NAME} handles line drawing characters")),
    );
    conf_radio(
        b,
        s,
        "Handling of line drawing characters:",
        ConfKey::VtMode,
        &[
            ("Use Unicode line drawing code points", VT_UNICODE),
            ("Poor man's line drawing (+, - and |)", VT_POORMAN),
        ],
    );
    b.conf_checkbox(s, "Copy and paste line drawing characters as lqqqk", ConfKey::RawCnpCopy);

    b.settitle("Window/Selection", "Options controlling copy and paste");
    let s = b.getset("Window/Selection", "mouse", Some("Control use of mouse"));
    b.conf_checkbox(s, "Shift overrides application's use of mouse", ConfKey::MouseOverride);
    conf_radio(
        b,
        s,
        "Default selection mode (Alt+drag does the other one):",
        ConfKey::RectSelect,
        &[("Normal", 0), ("Rectangular block", 1)],
    );

    let s = b.getset("Window/Selection", "charclass", Some("Control the select-one-word-at-a-time mode"));
    let spec = ListBoxSpec {
        multisel: true,
        ncols: 4,
        height: 10,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, Some("Character classes:"), spec, Handler::CharClass);
    let editbox = b.editbox(s, Some("Set to class"), Handler::CharClass);
    let button = b.button(s, "Set", Handler::CharClass);
    b.composites.charclass = Some(CharClassControls { listbox, editbox, button });

    b.settitle("Window/Colours", "Options controlling use of colours");
    let s = b.getset("Window/Colours", "general", Some("General options for colour usage"));
    b.conf_checkbox(s, "Allow terminal to specify ANSI colours", ConfKey::AnsiColour);
    b.conf_checkbox(s, "Allow terminal to use xterm 256-colour mode", ConfKey::Xterm256Colour);
    conf_radio(
        b,
        s,
        "Indicate bolded text by changing:",
        ConfKey::BoldStyle,
        &[("The font", 1), ("The colour", 2), ("Both", 3)],
    );

    let s = b.getset(
        "Window/Colours",
        "adjust",
        Some(&format!("Adjust the precise colours {APP_NAME} displays")),
    );
    b.text(s, "Select a colour from the list, and then click the Modify button to change its appearance.");
    let spec = ListBoxSpec {
        ncols: 1,
        height: 7,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, Some("Select a colour to adjust:"), spec, Handler::Colour);
    b.text(s, "RGB value:");
    let red = b.editbox(s, Some("Red"), Handler::Colour);
    let green = b.editbox(s, Some("Green"), Handler::Colour);
    let blue = b.editbox(s, Some("Blue"), Handler::Colour);
    let button = b.button(s, "Modify", Handler::Colour);
    b.composites.colour = Some(ColourControls {
        listbox,
        red,
        green,
        blue,
        button,
    });
}

// ============================================================================
// Connection
// ============================================================================

fn connection_panels(b: &mut ControlBox, layout: &Layout) {
    b.settitle("Connection", "Options controlling the connection");
    let s = b.getset("Connection", "keepalive", Some("Sending of null packets to keep session active"));
    int_field(b, s, "Seconds between keepalives (0 to turn off)", ConfKey::PingInterval);

    if layout.midsession {
        return;
    }

    let s = b.getset("Connection", "tcp", Some("Low-level TCP connection options"));
    b.conf_checkbox(s, "Disable Nagle's algorithm (TCP_NODELAY option)", ConfKey::TcpNoDelay);
    b.conf_checkbox(s, "Enable TCP keepalives (SO_KEEPALIVE option)", ConfKey::TcpKeepalives);

    let s = b.getset("Connection", "ipversion", Some("Internet protocol version"));
    b.radio(
        s,
        None,
        &[("Auto", ADDRTYPE_UNSPEC), ("IPv4", ADDRTYPE_IPV4), ("IPv6", ADDRTYPE_IPV6)],
        Handler::Radio(ConfKey::AddressFamily),
    );

    let label = if layout.ssh_available {
        "Logical name of remote host (e.g. for SSH key lookup):"
    } else {
        "Logical name of remote host:"
    };
    let s = b.getset("Connection", "identity", Some("Logical name of remote host"));
    str_field(b, s, label, ConfKey::LoghostName);

    b.settitle("Connection/Data", "Data to send to the server");
    let s = b.getset("Connection/Data", "login", Some("Login details"));
    str_field(b, s, "Auto-login username", ConfKey::Username);
    conf_radio(
        b,
        s,
        "When username is not specified:",
        ConfKey::UsernameFromEnv,
        &[("Prompt", 0), ("Use system username", 1)],
    );

    let s = b.getset("Connection/Data", "term", Some("Terminal details"));
    str_field(b, s, "Terminal-type string", ConfKey::TermType);
    str_field(b, s, "Terminal speeds", ConfKey::TermSpeed);

    let s = b.getset("Connection/Data", "env", Some("Environment variables"));
    let varbox = b.editbox(s, Some("Variable"), Handler::Environment);
    let valbox = b.editbox(s, Some("Value"), Handler::Environment);
    let add = b.button(s, "Add", Handler::Environment);
    let remove = b.button(s, "Remove", Handler::Environment);
    let spec = ListBoxSpec {
        ncols: 2,
        height: 3,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, None, spec, Handler::Environment);
    b.composites.environ = Some(EnvironControls {
        varbox,
        valbox,
        add,
        remove,
        listbox,
    });
}

fn proxy_panel(b: &mut ControlBox) {
    b.settitle("Connection/Proxy", "Options controlling proxy usage");
    let s = b.getset("Connection/Proxy", "basics", None);
    conf_radio(
        b,
        s,
        "Proxy type:",
        ConfKey::ProxyType,
        &[
            ("None", PROXY_NONE),
            ("SOCKS 4", PROXY_SOCKS4),
            ("SOCKS 5", PROXY_SOCKS5),
            ("HTTP", PROXY_HTTP),
            ("Telnet", PROXY_TELNET),
        ],
    );
    str_field(b, s, "Proxy hostname", ConfKey::ProxyHost);
    int_field(b, s, "Port", ConfKey::ProxyPort);
    str_field(b, s, "Exclude Hosts/IPs", ConfKey::ProxyExcludeList);
    b.conf_checkbox(s, "Consider proxying local host connections", ConfKey::EvenProxyLocalhost);
    conf_radio(
        b,
        s,
        "Do DNS name lookup at proxy end:",
        ConfKey::ProxyDns,
        &[("No", FORCE_OFF), ("Auto", AUTO), ("Yes", FORCE_ON)],
    );
    str_field(b, s, "Username", ConfKey::ProxyUsername);
    b.password(s, "Password", Handler::EditBox(EditField::Str(ConfKey::ProxyPassword)));
    str_field(b, s, "Telnet command", ConfKey::ProxyTelnetCommand);
    conf_radio(
        b,
        s,
        "Print proxy diagnostics in the terminal window",
        ConfKey::ProxyLogToTerm,
        &[("No", FORCE_OFF), ("Yes", FORCE_ON), ("Only until session starts", AUTO)],
    );
}

fn telnet_panel(b: &mut ControlBox, layout: &Layout) {
    b.settitle("Connection/Telnet", "Options controlling Telnet connections");
    let s = b.getset("Connection/Telnet", "protocol", Some("Telnet protocol adjustments"));
    if !layout.midsession {
        conf_radio(
            b,
            s,
            "Handling of OLD_ENVIRON ambiguity:",
            ConfKey::RfcEnviron,
            &[("BSD (commonplace)", 0), ("RFC 1408 (unusual)", 1)],
        );
        conf_radio(
            b,
            s,
            "Telnet negotiation mode:",
            ConfKey::PassiveTelnet,
            &[("Passive", 1), ("Active", 0)],
        );
    }
    b.conf_checkbox(s, "Keyboard sends Telnet special commands", ConfKey::TelnetKeyboard);
    b.conf_checkbox(s, "Return key sends Telnet New Line instead of ^M", ConfKey::TelnetNewline);
}

fn rlogin_panel(b: &mut ControlBox) {
    b.settitle("Connection/Rlogin", "Options controlling Rlogin connections");
    let s = b.getset("Connection/Rlogin", "data", Some("Data to send to the server"));
    str_field(b, s, "Local username:", ConfKey::LocalUsername);
}

// ============================================================================
// SSH
// ============================================================================

fn ssh_panels(b: &mut ControlBox, layout: &Layout) {
    let midsession = layout.midsession;
    let renegotiable = !layout.mode.ssh1_only();

    b.settitle("Connection/SSH", "Options controlling SSH connections");
    if midsession && !renegotiable {
        let s = b.getset("Connection/SSH", "disclaimer", None);
        b.text(
            s,
            "Nothing on this panel may be reconfigured in mid-session; it is only here so that sub-panels of it can exist without looking strange.",
        );
    }
    if !midsession {
        let s = b.getset("Connection/SSH", "data", Some("Data to send to the server"));
        str_field(b, s, "Remote command:", ConfKey::RemoteCmd);
        let s = b.getset("Connection/SSH", "protocol", Some("Protocol options"));
        b.conf_checkbox(s, "Don't start a shell or command at all", ConfKey::SshNoShell);
    }
    if !midsession || renegotiable {
        let s = b.getset("Connection/SSH", "protocol", Some("Protocol options"));
        b.conf_checkbox(s, "Enable compression", ConfKey::Compression);
    }
    if !midsession {
        let s = b.getset("Connection/SSH", "sharing", Some("Sharing an SSH connection between sessions"));
        b.conf_checkbox(s, "Share SSH connections if possible", ConfKey::SshConnectionSharing);
        b.text(s, "Permitted roles in a shared connection:");
        b.conf_checkbox(s, "Upstream (connecting to the real server)", ConfKey::SshConnectionSharingUpstream);
        b.conf_checkbox(s, "Downstream (connecting to the upstream session)", ConfKey::SshConnectionSharingDownstream);

        let s = b.getset("Connection/SSH", "protocol", Some("Protocol options"));
        conf_radio(
            b,
            s,
            "SSH protocol version:",
            ConfKey::SshProt,
            &[("2", 3), ("1 (INSECURE)", 0)],
        );
    }

    if renegotiable {
        b.settitle("Connection/SSH/Kex", "Options controlling SSH key exchange");
        let s = b.getset("Connection/SSH/Kex", "main", Some("Key exchange algorithm options"));
        b.draglist(s, "Algorithm selection policy:", 5, Handler::PrefList(PreferenceKind::Kex));
        let s = b.getset("Connection/SSH/Kex", "repeat", Some("Options controlling key re-exchange"));
        int_field(b, s, "Max minutes before rekey (0 for no limit)", ConfKey::SshRekeyTime);
        str_field(b, s, "Max data before rekey (0 for no limit)", ConfKey::SshRekeyData);
        b.text(s, "(Use 1M for 1 megabyte, 1G for 1 gigabyte etc)");

        b.settitle("Connection/SSH/Host keys", "Options controlling SSH host keys");
        let s = b.getset("Connection/SSH/Host keys", "main", Some("Host key algorithm preference"));
        b.draglist(s, "Algorithm selection policy:", 5, Handler::PrefList(PreferenceKind::HostKey));
    }

    if !midsession {
        let s = b.getset(
            "Connection/SSH/Host keys",
            "hostkeys",
            Some("Manually configure host keys for this connection"),
        );
        b.text(s, "Host keys or fingerprints to accept:");
        let remove = b.button(s, "Remove", Handler::ManualHostKeys);
        let spec = ListBoxSpec {
            ncols: 1,
            height: 2,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, None, spec, Handler::ManualHostKeys);
        let keybox = b.editbox(s, Some("Key"), Handler::ManualHostKeys);
        let add = b.button(s, "Add Key", Handler::ManualHostKeys);
        b.composites.hostkeys = Some(HostKeyControls {
            add,
            remove,
            listbox,
            keybox,
        });

        let s = b.getset("Connection/SSH/Host keys", "hostkeychk", Some("Server host key check"));
        b.conf_checkbox(s, "Don't check the server host key at login", ConfKey::SshHostkeyCheck);
    }

    if !midsession || renegotiable {
        b.settitle("Connection/SSH/Cipher", "Options controlling SSH encryption");
        let s = b.getset("Connection/SSH/Cipher", "encryption", Some("Encryption options"));
        b.draglist(
            s,
            "Encryption cipher selection policy:",
            6,
            Handler::PrefList(PreferenceKind::Cipher),
        );
        b.conf_checkbox(s, "Enable legacy use of single-DES in SSH-2", ConfKey::Ssh2Des);
    }

    if !midsession {
        auth_panels(b);
        tty_panel(b);

        b.settitle("Connection/SSH/X11", "Options controlling SSH X11 forwarding");
        let s = b.getset("Connection/SSH/X11", "x11", Some("X11 forwarding"));
        b.conf_checkbox(s, "Enable X11 forwarding", ConfKey::X11Forward);
        str_field(b, s, "X display location", ConfKey::X11Display);
        conf_radio(
            b,
            s,
            "Remote X11 authentication protocol",
            ConfKey::X11AuthType,
            &[("MIT-Magic-Cookie-1", X11_MIT), ("XDM-Authorization-1", X11_XDM)],
        );
    }

    tunnels_panel(b);

    if !midsession {
        bug_panels(b);
    }
}

fn auth_panels(b: &mut ControlBox) {
    b.settitle("Connection/SSH/Auth", "Options controlling SSH authentication");
    let s = b.getset("Connection/SSH/Auth", "main", None);
    b.conf_checkbox(s, "Display pre-authentication banner (SSH-2 only)", ConfKey::SshShowBanner);
    b.conf_checkbox(s, "Bypass authentication entirely (SSH-2 only)", ConfKey::SshNoUserauth);

    let s = b.getset("Connection/SSH/Auth", "methods", Some("Authentication methods"));
    b.conf_checkbox(s, "Attempt authentication using Pageant", ConfKey::TryAgent);
    b.conf_checkbox(s, "Attempt TIS or CryptoCard auth (SSH-1)", ConfKey::TryTis);
    b.conf_checkbox(s, "Attempt \"keyboard-interactive\" auth (SSH-2)", ConfKey::TryKi);

    let s = b.getset("Connection/SSH/Auth", "params", Some("Authentication parameters"));
    b.conf_checkbox(s, "Allow agent forwarding", ConfKey::AgentFwd);
    b.conf_checkbox(s, "Allow attempted changes of username in SSH-2", ConfKey::ChangeUsername);
    b.filesel(
        s,
        "Private key file for authentication:",
        "Select private key file",
        false,
        Handler::FileSelect(ConfKey::KeyFile),
    );

    b.settitle("Connection/SSH/Auth/GSSAPI", "Options controlling GSSAPI authentication");
    let s = b.getset("Connection/SSH/Auth/GSSAPI", "gssapi", None);
    b.conf_checkbox(s, "Attempt GSSAPI authentication (SSH-2 only)", ConfKey::TryGssAuth);
    b.conf_checkbox(s, "Allow GSSAPI credential delegation", ConfKey::GssFwdTgt);
    // With a single library there is nothing to order and no custom path.
    if GSS_LIBRARY_NAMES.len() > 1 {
        b.draglist(
            s,
            "Preference order for GSSAPI libraries:",
            GSS_LIBRARY_NAMES.len(),
            Handler::PrefList(PreferenceKind::GssLib),
        );
        b.filesel(
            s,
            "User-supplied GSSAPI library path:",
            "Select library file",
            false,
            Handler::FileSelect(ConfKey::SshGssCustom),
        );
    }
}

fn tty_panel(b: &mut ControlBox) {
    b.settitle("Connection/SSH/TTY", "Remote terminal settings");
    let s = b.getset("Connection/SSH/TTY", "sshtty", None);
    b.conf_checkbox(s, "Don't allocate a pseudo-terminal", ConfKey::NoPty);

    let s = b.getset("Connection/SSH/TTY", "ttymodes", Some("Terminal modes"));
    let spec = ListBoxSpec {
        ncols: 2,
        height: 8,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, None, spec, Handler::TtyModes);
    b.text(s, "Terminal modes to send:");
    let setbutton = b.button(s, "Set", Handler::TtyModes);
    let valradio = b.radio(
        s,
        None,
        &[("Auto", 0), ("Nothing", 1), ("This:", 2)],
        Handler::TtyModes,
    );
    let valbox = b.editbox(s, None, Handler::TtyModes);
    b.composites.ttymodes = Some(TtyModeControls {
        listbox,
        valradio,
        valbox,
        setbutton,
    });
}

fn tunnels_panel(b: &mut ControlBox) {
    b.settitle("Connection/SSH/Tunnels", "Options controlling SSH port forwarding");
    let s = b.getset("Connection/SSH/Tunnels", "portfwd", Some("Port forwarding"));
    b.conf_checkbox(s, "Local ports accept connections from other hosts", ConfKey::LportAcceptAll);
    b.conf_checkbox(s, "Remote ports do the same (SSH-2 only)", ConfKey::RportAcceptAll);

    b.text(s, "Forwarded ports:");
    let remove = b.button(s, "Remove", Handler::PortForwards);
    let spec = ListBoxSpec {
        ncols: 2,
        height: 3,
        ..ListBoxSpec::default()
    };
    let listbox = b.listbox(s, None, spec, Handler::PortForwards);
    b.text(s, "Add new forwarded port:");
    let add = b.button(s, "Add", Handler::PortForwards);
    let source = b.editbox(s, Some("Source port"), Handler::PortForwards);
    let destination = b.editbox(s, Some("Destination"), Handler::PortForwards);
    let direction = b.radio(
        s,
        None,
        &[("Local", 0), ("Remote", 1), ("Dynamic", 2)],
        Handler::PortForwards,
    );
    let family = b.radio(
        s,
        None,
        &[("Auto", ADDRTYPE_UNSPEC), ("IPv4", ADDRTYPE_IPV4), ("IPv6", ADDRTYPE_IPV6)],
        Handler::PortForwards,
    );
    b.composites.portfwd = Some(PortFwdControls {
        add,
        remove,
        listbox,
        source,
        destination,
        direction,
        family,
    });
}

fn bug_panels(b: &mut ControlBox) {
    b.settitle("Connection/SSH/Bugs", "Workarounds for SSH server bugs");
    let s = b.getset("Connection/SSH/Bugs", "main", Some("Detection of known bugs in SSH servers"));
    for (label, key) in [
        ("Chokes on SSH-2 ignore messages", ConfKey::SshBugIgnore2),
        ("Handles SSH-2 key re-exchange badly", ConfKey::SshBugRekey2),
        ("Chokes on PuTTY's SSH-2 'winadj' requests", ConfKey::SshBugWinadj),
        ("Replies to requests on closed channels", ConfKey::SshBugChanreq),
        ("Ignores SSH-2 maximum packet size", ConfKey::SshBugMaxpkt2),
    ] {
        b.droplist(s, label, SSH_BUG_OPTIONS, Handler::SshBug(key));
    }

    b.settitle("Connection/SSH/More bugs", "Further workarounds for SSH server bugs");
    let s = b.getset("Connection/SSH/More bugs", "main", Some("Detection of known bugs in SSH servers"));
    for (label, key) in [
        ("Requires padding on SSH-2 RSA signatures", ConfKey::SshBugRsapad2),
        ("Only supports pre-RFC4419 SSH-2 DH GEX", ConfKey::SshBugOldgex2),
        ("Miscomputes SSH-2 HMAC keys", ConfKey::SshBugHmac2),
        ("Misuses the session ID in SSH-2 PK auth", ConfKey::SshBugPksessid2),
        ("Miscomputes SSH-2 encryption keys", ConfKey::SshBugDerivekey2),
        ("Chokes on SSH-1 ignore messages", ConfKey::SshBugIgnore1),
        ("Refuses all SSH-1 password camouflage", ConfKey::SshBugPlainpw1),
        ("Chokes on SSH-1 RSA authentication", ConfKey::SshBugRsa1),
    ] {
        b.droplist(s, label, SSH_BUG_OPTIONS, Handler::SshBug(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;
    use crate::dispatch::Event;
    use crate::testutil::{Harness, TestBackends};
    use confbox_config::Conf;

    struct TelnetOnly;

    impl BackendRegistry for TelnetOnly {
        fn default_port(&self, protocol: i32) -> Option<i32> {
            match protocol {
                PROT_TELNET => Some(23),
                PROT_RLOGIN => Some(513),
                PROT_RAW => Some(0),
                _ => None,
            }
        }

        fn is_launchable(&self, conf: &Conf) -> bool {
            !conf.get_str(ConfKey::Host).is_empty()
        }
    }

    fn paths(b: &ControlBox) -> Vec<&str> {
        b.panels().iter().map(|p| p.path.as_str()).collect()
    }

    fn label_of(b: &ControlBox, ctrl: ControlId) -> Option<&str> {
        b.get(ctrl).and_then(|c| c.label.as_deref())
    }

    #[test]
    fn test_new_session_has_every_panel() {
        let b = setup_config_box(DialogMode::NewSession, &TestBackends);
        let paths = paths(&b);
        for path in [
            "Session",
            "Session/Logging",
            "Terminal",
            "Terminal/Keyboard",
            "Terminal/Bell",
            "Terminal/Features",
            "Window",
            "Window/Appearance",
            "Window/Behaviour",
            "Window/Translation",
            "Window/Selection",
            "Window/Colours",
            "Connection",
            "Connection/Data",
            "Connection/Proxy",
            "Connection/Telnet",
            "Connection/Rlogin",
            "Connection/SSH",
            "Connection/SSH/Kex",
            "Connection/SSH/Host keys",
            "Connection/SSH/Cipher",
            "Connection/SSH/Auth",
            "Connection/SSH/Auth/GSSAPI",
            "Connection/SSH/TTY",
            "Connection/SSH/X11",
            "Connection/SSH/Tunnels",
            "Connection/SSH/Bugs",
            "Connection/SSH/More bugs",
        ] {
            assert!(paths.contains(&path), "missing panel {path}");
        }

        let c = &b.composites;
        assert!(c.host_port.is_some() && c.charclass.is_some() && c.colour.is_some());
        assert!(c.ttymodes.is_some() && c.environ.is_some() && c.portfwd.is_some() && c.hostkeys.is_some());
        let ssd = c.session.unwrap();
        assert!(ssd.load.is_some() && ssd.delete.is_some());
        assert_eq!(label_of(&b, ssd.ok), Some("Open"));
        assert!(matches!(
            b.get(ssd.ok).unwrap().kind,
            ControlKind::Button { is_default: true, .. }
        ));
    }

    #[test]
    fn test_new_session_refreshes_cleanly() {
        let mut h = Harness::new(setup_config_box(DialogMode::NewSession, &TestBackends));
        let before = h.conf.clone();
        h.refresh_all();
        assert_eq!(h.conf, before, "refresh of defaults changed nothing");
        assert!(h.dlg.unbracketed_writes().is_empty());
        assert_eq!(h.dlg.beeps(), 0);

        let hp = h.dialog.controls().composites.host_port.unwrap();
        assert_eq!(h.dlg.text(hp.port), "22");
        let ssd = h.dialog.controls().composites.session.unwrap();
        assert_eq!(h.dlg.rows(ssd.listbox), vec![confbox_config::DEFAULT_SESSION_NAME]);
    }

    #[test]
    fn test_every_loadable_radio_value_has_a_button() {
        let mut b = setup_config_box(DialogMode::NewSession, &TestBackends);
        crate::addons::bell_setup_config_box(&mut b).unwrap();
        let mut seen = 0;
        for id in b.ids() {
            let control = b.get(id).unwrap();
            let Handler::Radio(key) = control.handler else {
                continue;
            };
            let values = radio_values(key).unwrap_or_else(|| panic!("{key} has no value table"));
            let offered: Vec<i32> = control.buttons().iter().map(|button| button.value).collect();
            for value in values {
                assert!(offered.contains(value), "{key} = {value} has no button");
            }
            seen += 1;
        }
        assert!(seen > 15, "only {seen} radio groups");
    }

    #[test]
    fn test_protocol_switch_in_full_dialog() {
        let mut h = Harness::new(setup_config_box(DialogMode::NewSession, &TestBackends));
        h.refresh_all();
        let radio = h.dialog.controls().find_by_label("Connection type:").unwrap();
        let hp = h.dialog.controls().composites.host_port.unwrap();
        // Raw, Telnet, Rlogin, SSH, Serial
        h.choose_radio(radio, 1);
        assert_eq!(h.conf.get_int(ConfKey::Protocol), PROT_TELNET);
        assert_eq!(h.dlg.text(hp.port), "23");
        h.choose_radio(radio, 4);
        assert_eq!(h.conf.get_int(ConfKey::Protocol), PROT_SERIAL);
        assert_eq!(h.dlg.text(hp.port), "9600");
    }

    #[test]
    fn test_midsession_ssh_omissions() {
        let mode = DialogMode::MidSession {
            protocol: PROT_SSH,
            ssh1: false,
        };
        let b = setup_config_box(mode, &TestBackends);
        let paths = paths(&b);
        for path in ["Connection/SSH/Kex", "Connection/SSH/Cipher", "Connection/SSH/Tunnels"] {
            assert!(paths.contains(&path), "missing panel {path}");
        }
        for path in [
            "Connection/Data",
            "Connection/Proxy",
            "Connection/Telnet",
            "Connection/Rlogin",
            "Connection/SSH/Auth",
            "Connection/SSH/TTY",
            "Connection/SSH/X11",
            "Connection/SSH/Bugs",
        ] {
            assert!(!paths.contains(&path), "unexpected panel {path}");
        }
        let c = &b.composites;
        assert!(c.host_port.is_none() && c.environ.is_none() && c.hostkeys.is_none());
        assert!(c.portfwd.is_some());
        let ssd = c.session.unwrap();
        assert!(ssd.midsession && ssd.load.is_none() && ssd.delete.is_none());
        assert_eq!(label_of(&b, ssd.ok), Some("Apply"));
    }

    #[test]
    fn test_midsession_ssh1_hides_algorithm_panels() {
        let mode = DialogMode::MidSession {
            protocol: PROT_SSH,
            ssh1: true,
        };
        let b = setup_config_box(mode, &TestBackends);
        let paths = paths(&b);
        assert!(!paths.contains(&"Connection/SSH/Kex"));
        assert!(!paths.contains(&"Connection/SSH/Cipher"));
        assert!(!paths.contains(&"Connection/SSH/Host keys"));
        assert!(paths.contains(&"Connection/SSH/Tunnels"));
        assert!(b.find_control("Connection/SSH", |c| c.kind == ControlKind::Text).is_some());
    }

    #[test]
    fn test_midsession_telnet_has_no_ssh() {
        let mode = DialogMode::MidSession {
            protocol: PROT_TELNET,
            ssh1: false,
        };
        let b = setup_config_box(mode, &TestBackends);
        let paths = paths(&b);
        assert!(paths.contains(&"Connection/Telnet"));
        assert!(!paths.iter().any(|p| p.starts_with("Connection/SSH")));
        let logging = b.find_by_label("Session logging:").unwrap();
        assert_eq!(b.get(logging).unwrap().buttons().len(), 3);
        // The Telnet negotiation radios are new-session only.
        assert!(b.find_by_label("Telnet negotiation mode:").is_none());
    }

    #[test]
    fn test_local_tool_has_no_connection_panels() {
        let mode = DialogMode::MidSession {
            protocol: -1,
            ssh1: false,
        };
        let b = setup_config_box(mode, &TestBackends);
        assert!(!paths(&b).iter().any(|p| p.starts_with("Connection")));
    }

    #[test]
    fn test_build_without_ssh() {
        let b = setup_config_box(DialogMode::NewSession, &TelnetOnly);
        assert!(!paths(&b).iter().any(|p| p.starts_with("Connection/SSH")));
        let radio = b.find_by_label("Connection type:").unwrap();
        let values: Vec<i32> = b.get(radio).unwrap().buttons().iter().map(|rb| rb.value).collect();
        assert_eq!(values, vec![PROT_RAW, PROT_TELNET, PROT_RLOGIN]);
        let logging = b.find_by_label("Session logging:").unwrap();
        assert_eq!(b.get(logging).unwrap().buttons().len(), 3);
        assert_eq!(
            b.find_by_label("Logical name of remote host:").map(|c| label_of(&b, c)),
            Some(Some("Logical name of remote host:"))
        );
    }

    #[test]
    fn test_scaled_bell_fields() {
        let mut h = Harness::new(setup_config_box(DialogMode::NewSession, &TestBackends));
        h.refresh_all();
        let field = h.dialog.controls().find_by_label("... in this many seconds").unwrap();
        assert_eq!(h.dlg.text(field), "2");
        h.type_text(field, "0.25");
        assert_eq!(h.conf.get_int(ConfKey::BellOvlT), 250);
        h.event(field, Event::Refresh);
        assert_eq!(h.dlg.text(field), "0.25");
    }
}
