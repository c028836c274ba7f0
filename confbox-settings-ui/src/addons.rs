//! Platform add-ons.
//!
//! Each add-on runs on a box returned by [`crate::setup_config_box`] and
//! before it is handed to [`crate::ConfigDialog`]. They extend existing
//! controls in place through the builder extension point and may add
//! panels of their own.

use confbox_config::ConfKey;
use confbox_config::options::{
    B_IND_DISABLED, B_IND_FLASH, B_IND_STEADY, BELL_PCSPEAKER, BELL_WAVEFILE, PROT_CYGTERM,
};

use crate::control::Handler;
use crate::controlbox::{BuildError, ControlBox};

/// Offer Cygterm as a connection type and add its options panel.
///
/// Mid-session there is no protocol radio to extend and no panel is
/// added, so the call is a no-op.
pub fn cygterm_setup_config_box(b: &mut ControlBox, midsession: bool) -> Result<(), BuildError> {
    if let Some(radio) = b.find_control("Session", |c| c.handler == Handler::Protocol) {
        b.append_radio_option(radio, "Cygterm", PROT_CYGTERM)?;
    }
    if b.is_finalized() {
        return Err(BuildError::Finalized);
    }
    if midsession {
        return Ok(());
    }

    b.settitle("Connection/Cygterm", "Options controlling Cygterm sessions");
    let s = b.getset("Connection/Cygterm", "cygterm", Some("Configure Cygwin paths"));
    b.conf_checkbox(s, "Autodetect Cygwin installation path", ConfKey::CygAutoPath);
    b.conf_checkbox(s, "Use Cygwin64", ConfKey::Cygterm64);
    log::debug!("Cygterm add-on applied");
    Ok(())
}

/// Extra bell styles for hosts that can beep the PC speaker or play a
/// sound file, plus the taskbar indication on a bell.
pub fn bell_setup_config_box(b: &mut ControlBox) -> Result<(), BuildError> {
    if b.is_finalized() {
        return Err(BuildError::Finalized);
    }
    if let Some(radio) = b.find_control("Terminal/Bell", |c| c.handler == Handler::Radio(ConfKey::Beep)) {
        b.append_radio_option(radio, "Beep using the PC speaker", BELL_PCSPEAKER)?;
        b.append_radio_option(radio, "Play a custom sound file", BELL_WAVEFILE)?;
    }

    let s = b.getset("Terminal/Bell", "style", Some("Set the style of bell"));
    b.filesel(
        s,
        "Custom sound file to play as a bell:",
        "Select bell sound file",
        false,
        Handler::FileSelect(ConfKey::BellWavefile),
    );
    b.radio(
        s,
        Some("Taskbar/caption indication on bell:"),
        &[
            ("Disabled", B_IND_DISABLED),
            ("Flashing", B_IND_FLASH),
            ("Steady", B_IND_STEADY),
        ],
        Handler::Radio(ConfKey::BeepInd),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{DialogMode, setup_config_box};
    use crate::testutil::{Harness, TestBackends};
    use crate::traits::DialogOps;
    use confbox_config::Filename;
    use confbox_config::options::BELL_DEFAULT;

    fn new_session_box() -> ControlBox {
        setup_config_box(DialogMode::NewSession, &TestBackends)
    }

    #[test]
    fn test_cygterm_appends_protocol_button() {
        let mut b = new_session_box();
        cygterm_setup_config_box(&mut b, false).unwrap();

        let radio = b.find_control("Session", |c| c.handler == Handler::Protocol).unwrap();
        let last = b.get(radio).unwrap().buttons().last().unwrap().clone();
        assert_eq!(last.label, "Cygterm");
        assert_eq!(last.value, PROT_CYGTERM);
        assert!(b.panel("Connection/Cygterm").is_some());
        assert!(b.find_by_label("Use Cygwin64").is_some());
    }

    #[test]
    fn test_cygterm_selection_switches_to_command() {
        let mut b = new_session_box();
        cygterm_setup_config_box(&mut b, false).unwrap();
        let radio = b.find_control("Session", |c| c.handler == Handler::Protocol).unwrap();
        let index = b.get(radio).unwrap().buttons().len() - 1;
        let host = b.composites.host_port.unwrap().host;

        let mut h = Harness::new(b);
        h.refresh_all();
        h.choose_radio(radio, index);
        assert_eq!(h.conf.get_int(ConfKey::Protocol), PROT_CYGTERM);
        assert_eq!(h.dlg.label(host).as_deref(), Some(crate::COMMAND_LABEL));
        assert_eq!(h.dlg.text(host), "-");
    }

    #[test]
    fn test_cygterm_midsession_adds_nothing() {
        let mut b = setup_config_box(
            DialogMode::MidSession {
                protocol: confbox_config::options::PROT_SSH,
                ssh1: false,
            },
            &TestBackends,
        );
        let before = b.len();
        cygterm_setup_config_box(&mut b, true).unwrap();
        assert_eq!(b.len(), before);
        assert!(b.panel("Connection/Cygterm").is_none());
    }

    #[test]
    fn test_bell_addon_extends_style_radio() {
        let mut b = new_session_box();
        bell_setup_config_box(&mut b).unwrap();

        let radio = b
            .find_control("Terminal/Bell", |c| c.handler == Handler::Radio(ConfKey::Beep))
            .unwrap();
        let values: Vec<i32> = b.get(radio).unwrap().buttons().iter().map(|r| r.value).collect();
        assert_eq!(&values[values.len() - 2..], &[BELL_PCSPEAKER, BELL_WAVEFILE]);

        let file = b.find_by_label("Custom sound file to play as a bell:").unwrap();
        let ind = b.find_by_label("Taskbar/caption indication on bell:").unwrap();
        let mut h = Harness::new(b);
        h.refresh_all();
        assert_eq!(h.conf.get_int(ConfKey::Beep), BELL_DEFAULT);

        let pc = values.len() - 2;
        h.choose_radio(radio, pc);
        assert_eq!(h.conf.get_int(ConfKey::Beep), BELL_PCSPEAKER);

        h.dlg.filesel_set(file, &Filename::new("/usr/share/sounds/bell.wav"));
        h.event(file, crate::Event::ValChange);
        assert_eq!(
            h.conf.get_filename(ConfKey::BellWavefile),
            Filename::new("/usr/share/sounds/bell.wav")
        );

        h.choose_radio(ind, 2);
        assert_eq!(h.conf.get_int(ConfKey::BeepInd), B_IND_STEADY);
    }

    #[test]
    fn test_addons_fail_after_finalize() {
        let mut b = new_session_box();
        b.finalize();
        assert_eq!(cygterm_setup_config_box(&mut b, false), Err(BuildError::Finalized));
        assert_eq!(bell_setup_config_box(&mut b), Err(BuildError::Finalized));
    }

    #[test]
    fn test_append_rejects_wrong_kind() {
        let mut b = new_session_box();
        let host = b.composites.host_port.unwrap().host;
        assert_eq!(b.append_radio_option(host, "x", 1), Err(BuildError::WrongKind(host)));
        assert_eq!(b.append_list_option(host, "x", 1), Err(BuildError::WrongKind(host)));
    }
}
