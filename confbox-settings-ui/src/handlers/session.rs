//! Session saver: the saved-session list, its name field, the Load, Save
//! and Delete buttons, and the dialog's Open/Apply and Cancel buttons.

use std::cmp::Ordering;

use confbox_config::{Conf, DEFAULT_SESSION_NAME};

use crate::control::ControlId;
use crate::controlbox::{SessionControls, require};
use crate::dispatch::{Event, HandlerContext, SessionSaverState};
use crate::traits::{DialogResult, Services};

/// A session loaded from the selected list row.
struct Loaded {
    conf: Conf,
    index: usize,
    is_default: bool,
}

fn fetch_sessions(services: &Services) -> Vec<String> {
    match services.storage.enumerate(true) {
        Ok(sessions) => sessions,
        Err(e) => {
            log::warn!("Failed to list saved sessions: {e:#}");
            vec![DEFAULT_SESSION_NAME.to_string()]
        }
    }
}

fn saver_state<'s>(state: &'s mut Option<SessionSaverState>, services: &Services) -> &'s mut SessionSaverState {
    state.get_or_insert_with(|| SessionSaverState {
        sessions: fetch_sessions(services),
        saved_session: String::new(),
    })
}

/// Name under which a list entry is stored: the default entry is the
/// empty name.
fn storage_name(name: &str) -> &str {
    if name == DEFAULT_SESSION_NAME { "" } else { name }
}

/// Type-ahead: the first entry not sorting before `typed`, or the last
/// entry if every entry does.
fn closest_entry(sessions: &[String], typed: &str) -> Option<usize> {
    if sessions.is_empty() {
        return None;
    }
    let mut bottom: isize = -1;
    let mut top = sessions.len() as isize;
    while top - bottom > 1 {
        let halfway = (top + bottom) / 2;
        match typed.cmp(sessions[halfway as usize].as_str()) {
            Ordering::Less | Ordering::Equal => top = halfway,
            Ordering::Greater => bottom = halfway,
        }
    }
    Some((top as usize).min(sessions.len() - 1))
}

/// Load the session selected in the list. Beeps if nothing is selected;
/// reports storage errors.
fn load_selected(ctx: &mut HandlerContext<'_>, ssd: &SessionControls) -> Option<Loaded> {
    let Some(index) = ctx.dlg.listbox_index(ssd.listbox) else {
        log::warn!("Load pressed with no session selected");
        ctx.dlg.beep();
        return None;
    };
    let state = saver_state(&mut ctx.state.session, ctx.services);
    let Some(name) = state.sessions.get(index).cloned() else {
        log::warn!("Selected row {index} is past the end of the session list");
        ctx.dlg.beep();
        return None;
    };
    let is_default = name == DEFAULT_SESSION_NAME;
    match ctx.services.storage.load(storage_name(&name)) {
        Ok(conf) => {
            state.saved_session = if is_default { String::new() } else { name };
            Some(Loaded { conf, index, is_default })
        }
        Err(e) => {
            log::warn!("Failed to load session {name:?}: {e:#}");
            ctx.dlg.error_msg(&format!("Unable to load session \"{name}\": {e:#}"));
            None
        }
    }
}

/// Show a loaded session in every control, keeping the list selection.
fn show_loaded(ctx: &mut HandlerContext<'_>, ssd: &SessionControls, index: usize) {
    ctx.refresh_all();
    // Refreshing the name field may have moved the selection.
    ctx.dlg.listbox_select(ssd.listbox, index);
}

pub(crate) fn handle(ctx: &mut HandlerContext<'_>, ctrl: ControlId, event: Event) {
    let ssd = require(&ctx.controls.composites.session, "session saver");
    match event {
        Event::Refresh => {
            let state = saver_state(&mut ctx.state.session, ctx.services);
            if ctrl == ssd.editbox {
                let name = state.saved_session.clone();
                ctx.dlg.editbox_set(ctrl, &name);
            } else if ctrl == ssd.listbox {
                let sessions = state.sessions.clone();
                super::fill_list(ctx, ctrl, &sessions);
            }
        }
        Event::ValChange => {
            if ctrl == ssd.editbox {
                let typed = ctx.dlg.editbox_get(ctrl);
                let state = saver_state(&mut ctx.state.session, ctx.services);
                let closest = closest_entry(&state.sessions, &typed);
                state.saved_session = typed;
                if let Some(index) = closest {
                    ctx.dlg.listbox_select(ssd.listbox, index);
                }
            }
        }
        Event::Action => action(ctx, &ssd, ctrl),
        _ => {}
    }
}

fn action(ctx: &mut HandlerContext<'_>, ssd: &SessionControls, ctrl: ControlId) {
    if !ssd.midsession && (ctrl == ssd.listbox || Some(ctrl) == ssd.load) {
        // Double-clicking a session with somewhere to connect to opens it.
        if let Some(loaded) = load_selected(ctx, ssd) {
            ctx.conf.copy_from(&loaded.conf);
            show_loaded(ctx, ssd, loaded.index);
            if ctrl == ssd.listbox && !loaded.is_default && ctx.services.backends.is_launchable(ctx.conf) {
                ctx.dlg.end(DialogResult::Accept);
            }
        }
    } else if ctrl == ssd.save {
        save(ctx, ssd);
    } else if !ssd.midsession && Some(ctrl) == ssd.delete {
        delete(ctx, ssd);
    } else if ctrl == ssd.ok {
        accept(ctx, ssd);
    } else if ctrl == ssd.cancel {
        ctx.dlg.end(DialogResult::Cancel);
    }
}

fn save(ctx: &mut HandlerContext<'_>, ssd: &SessionControls) {
    let state = saver_state(&mut ctx.state.session, ctx.services);
    if state.saved_session.is_empty() {
        // Nothing typed: save over the selected entry.
        let Some(index) = ctx.dlg.listbox_index(ssd.listbox) else {
            log::warn!("Save pressed with no name typed and no session selected");
            ctx.dlg.beep();
            return;
        };
        let Some(selected) = state.sessions.get(index) else {
            log::warn!("Selected row {index} is past the end of the session list");
            ctx.dlg.beep();
            return;
        };
        state.saved_session = storage_name(selected).to_string();
    }
    let name = storage_name(&state.saved_session).to_string();

    if let Err(e) = ctx.services.storage.save(&name, ctx.conf) {
        log::warn!("Failed to save session {name:?}: {e:#}");
        ctx.dlg.error_msg(&format!("Unable to save session \"{name}\": {e}"));
    } else {
        log::info!("Saved session {name:?}");
    }

    let sessions = fetch_sessions(ctx.services);
    saver_state(&mut ctx.state.session, ctx.services).sessions = sessions;
    ctx.refresh(ssd.editbox);
    ctx.refresh(ssd.listbox);
}

fn delete(ctx: &mut HandlerContext<'_>, ssd: &SessionControls) {
    // Row 0 is the default entry, which cannot be deleted.
    let index = match ctx.dlg.listbox_index(ssd.listbox) {
        Some(index) if index > 0 => index,
        selected => {
            log::warn!("Delete refused for selection {selected:?}");
            ctx.dlg.beep();
            return;
        }
    };
    let state = saver_state(&mut ctx.state.session, ctx.services);
    let Some(name) = state.sessions.get(index).cloned() else {
        log::warn!("Selected row {index} is past the end of the session list");
        ctx.dlg.beep();
        return;
    };
    if let Err(e) = ctx.services.storage.delete(&name) {
        log::warn!("Failed to delete session {name:?}: {e:#}");
        ctx.dlg.error_msg(&format!("Unable to delete session \"{name}\": {e}"));
    } else {
        log::info!("Deleted session {name:?}");
    }
    let sessions = fetch_sessions(ctx.services);
    saver_state(&mut ctx.state.session, ctx.services).sessions = sessions;
    ctx.refresh(ssd.listbox);
}

fn accept(ctx: &mut HandlerContext<'_>, ssd: &SessionControls) {
    if ssd.midsession {
        ctx.dlg.end(DialogResult::Accept);
        return;
    }

    // Open pressed straight after picking a session, with nothing to
    // connect to yet: open the picked session instead.
    if ctx.dlg.last_focused(ssd.ok) == Some(ssd.listbox) && !ctx.services.backends.is_launchable(ctx.conf) {
        let Some(loaded) = load_selected(ctx, ssd) else {
            return;
        };
        show_loaded(ctx, ssd, loaded.index);
        if !loaded.is_default && ctx.services.backends.is_launchable(&loaded.conf) {
            ctx.conf.copy_from(&loaded.conf);
            ctx.dlg.end(DialogResult::Accept);
        } else {
            log::warn!("Open refused: the picked session has nowhere to connect to");
            ctx.dlg.beep();
        }
        return;
    }

    if ctx.services.backends.is_launchable(ctx.conf) {
        ctx.dlg.end(DialogResult::Accept);
    } else {
        log::warn!("Open refused: the settings have nowhere to connect to");
        ctx.dlg.beep();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Harness;
    use crate::traits::DialogOps;
    use crate::{ControlBox, Handler, ListBoxSpec};
    use confbox_config::ConfKey;

    fn saver_harness(midsession: bool) -> (Harness, SessionControls) {
        let mut b = ControlBox::new();
        let s = b.getset("Session", "savedsessions", Some("Load, save or delete a stored session"));
        let editbox = b.editbox(s, Some("Saved Sessions"), Handler::SessionSaver);
        let spec = ListBoxSpec {
            height: 7,
            ..ListBoxSpec::default()
        };
        let listbox = b.listbox(s, None, spec, Handler::SessionSaver);
        let load = (!midsession).then(|| b.button(s, "Load", Handler::SessionSaver));
        let save = b.button(s, "Save", Handler::SessionSaver);
        let delete = (!midsession).then(|| b.button(s, "Delete", Handler::SessionSaver));
        let buttons = b.getset("", "", None);
        let ok_label = if midsession { "Apply" } else { "Open" };
        let ok = b.dialog_button(buttons, ok_label, true, false, Handler::SessionSaver);
        let cancel = b.dialog_button(buttons, "Cancel", false, true, Handler::SessionSaver);
        let ssd = SessionControls { editbox, listbox, load, save, delete, ok, cancel, midsession };
        b.composites.session = Some(ssd);
        (Harness::new(b), ssd)
    }

    fn session_with_host(host: &str) -> Conf {
        let mut conf = Conf::default();
        conf.set_str(ConfKey::Host, host);
        conf
    }

    #[test]
    fn test_list_starts_with_default_entry() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("work", session_with_host("work.example.com"));
        h.store.insert("home", session_with_host("home.example.com"));
        h.refresh_all();
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME, "home", "work"]);
        assert_eq!(h.dlg.text(ssd.editbox), "");
    }

    #[test]
    fn test_typing_selects_closest_entry() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("alpha", Conf::default());
        h.store.insert("beta", Conf::default());
        h.refresh_all();
        h.type_text(ssd.editbox, "b");
        assert_eq!(h.dlg.selection(ssd.listbox), Some(2));
        assert_eq!(h.dialog.state().session.as_ref().unwrap().saved_session, "b");
    }

    #[test]
    fn test_save_under_typed_name() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.conf.set_str(ConfKey::Host, "db.example.com");
        h.type_text(ssd.editbox, "db");
        h.click(ssd.save);

        assert_eq!(h.store.get("db").unwrap().get_str(ConfKey::Host), "db.example.com");
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME, "db"]);
        assert_eq!(h.dlg.text(ssd.editbox), "db");
    }

    #[test]
    fn test_save_over_selected_default() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.conf.set_int(ConfKey::Port, 2022);
        h.dlg.listbox_select(ssd.listbox, 0);
        h.click(ssd.save);
        assert_eq!(h.store.get("").unwrap().get_int(ConfKey::Port), 2022);
        // The default entry is stored under the empty name, not listed twice.
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME]);
    }

    #[test]
    fn test_save_with_nothing_named_beeps() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.click(ssd.save);
        assert_eq!(h.dlg.beeps(), 1);
        assert!(h.store.get("").is_none());
    }

    #[test]
    fn test_save_failure_reported() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.store.set_fail_writes(true);
        h.type_text(ssd.editbox, "db");
        h.click(ssd.save);
        assert_eq!(h.dlg.errors().len(), 1);
        assert!(h.dlg.errors()[0].starts_with("Unable to save session \"db\""));
    }

    #[test]
    fn test_load_copies_session() {
        let (mut h, ssd) = saver_harness(false);
        let mut saved = session_with_host("work.example.com");
        saved.set_int(ConfKey::Port, 2200);
        h.store.insert("work", saved);
        h.refresh_all();

        h.dlg.listbox_select(ssd.listbox, 1);
        h.click(ssd.load.unwrap());
        assert_eq!(h.conf.get_str(ConfKey::Host), "work.example.com");
        assert_eq!(h.conf.get_int(ConfKey::Port), 2200);
        assert_eq!(h.dlg.text(ssd.editbox), "work");
        assert_eq!(h.dlg.selection(ssd.listbox), Some(1));
        // Load alone never opens the session.
        assert_eq!(h.dlg.result(), None);
    }

    #[test]
    fn test_load_without_selection_beeps() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.click(ssd.load.unwrap());
        assert_eq!(h.dlg.beeps(), 1);
    }

    #[test]
    fn test_double_click_opens_launchable_session() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("work", session_with_host("work.example.com"));
        h.store.insert("empty", Conf::default());
        h.refresh_all();

        h.dlg.listbox_select(ssd.listbox, 1);
        h.click(ssd.listbox);
        assert_eq!(h.dlg.result(), None, "no host to connect to");

        h.dlg.listbox_select(ssd.listbox, 2);
        h.click(ssd.listbox);
        assert_eq!(h.dlg.result(), Some(DialogResult::Accept));
        assert_eq!(h.conf.get_str(ConfKey::Host), "work.example.com");
    }

    #[test]
    fn test_double_click_on_default_never_opens() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("", session_with_host("default.example.com"));
        h.refresh_all();
        h.dlg.listbox_select(ssd.listbox, 0);
        h.click(ssd.listbox);
        assert_eq!(h.conf.get_str(ConfKey::Host), "default.example.com");
        assert_eq!(h.dlg.result(), None);
        assert_eq!(h.dlg.text(ssd.editbox), "");
    }

    #[test]
    fn test_delete() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("old", Conf::default());
        h.refresh_all();

        h.dlg.listbox_select(ssd.listbox, 0);
        h.click(ssd.delete.unwrap());
        assert_eq!(h.dlg.beeps(), 1);

        h.dlg.listbox_select(ssd.listbox, 1);
        h.click(ssd.delete.unwrap());
        assert!(!h.store.contains("old"));
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME]);
    }

    #[test]
    fn test_delete_without_selection_beeps() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("old", Conf::default());
        h.refresh_all();
        h.dlg.clear_selection(ssd.listbox);

        h.click(ssd.delete.unwrap());
        assert_eq!(h.dlg.beeps(), 1);
        assert!(h.dlg.errors().is_empty());
        assert!(h.store.contains("old"));
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME, "old"]);
    }

    #[test]
    fn test_stale_row_beeps() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("work", session_with_host("work.example.com"));
        h.refresh_all();
        // A row the saver never listed, as if the widget were out of date.
        h.dlg.listbox_add(ssd.listbox, "ghost");
        h.dlg.listbox_select(ssd.listbox, 2);

        h.click(ssd.load.unwrap());
        assert_eq!(h.dlg.beeps(), 1);
        assert!(h.dlg.errors().is_empty());
        assert_eq!(h.conf, Conf::default());

        h.dlg.listbox_select(ssd.listbox, 2);
        h.click(ssd.delete.unwrap());
        assert_eq!(h.dlg.beeps(), 2);
        assert!(h.store.contains("work"));
    }

    #[test]
    fn test_open_needs_somewhere_to_connect() {
        let (mut h, ssd) = saver_harness(false);
        h.refresh_all();
        h.click(ssd.ok);
        assert_eq!(h.dlg.beeps(), 1);
        assert_eq!(h.dlg.result(), None);

        h.conf.set_str(ConfKey::Host, "example.com");
        h.click(ssd.ok);
        assert_eq!(h.dlg.result(), Some(DialogResult::Accept));
    }

    #[test]
    fn test_open_straight_from_list_loads_selection() {
        let (mut h, ssd) = saver_harness(false);
        h.store.insert("work", session_with_host("work.example.com"));
        h.refresh_all();

        h.dlg.listbox_select(ssd.listbox, 1);
        h.dlg.set_focus(ssd.listbox);
        h.click(ssd.ok);
        assert_eq!(h.dlg.result(), Some(DialogResult::Accept));
        assert_eq!(h.conf.get_str(ConfKey::Host), "work.example.com");
    }

    #[test]
    fn test_midsession_apply_and_cancel() {
        let (mut h, ssd) = saver_harness(true);
        assert!(ssd.load.is_none() && ssd.delete.is_none());
        h.refresh_all();
        h.click(ssd.ok);
        assert_eq!(h.dlg.result(), Some(DialogResult::Accept));

        h.dlg.clear_feedback();
        h.click(ssd.cancel);
        assert_eq!(h.dlg.result(), Some(DialogResult::Cancel));
    }

    #[test]
    fn test_storage_listing_failure_falls_back() {
        struct Broken;
        impl crate::traits::SessionStorage for Broken {
            fn load(&self, _: &str) -> anyhow::Result<Conf> {
                anyhow::bail!("unreadable")
            }
            fn save(&mut self, _: &str, _: &Conf) -> anyhow::Result<()> {
                anyhow::bail!("unwritable")
            }
            fn delete(&mut self, _: &str) -> anyhow::Result<()> {
                anyhow::bail!("unwritable")
            }
            fn enumerate(&self, _: bool) -> anyhow::Result<Vec<String>> {
                anyhow::bail!("unreadable")
            }
        }
        let (mut h, ssd) = saver_harness(false);
        h.dialog.services_mut().storage = Box::new(Broken);
        h.refresh_all();
        assert_eq!(h.dlg.rows(ssd.listbox), vec![DEFAULT_SESSION_NAME]);

        h.dlg.listbox_select(ssd.listbox, 0);
        h.click(ssd.load.unwrap());
        assert_eq!(h.dlg.errors().len(), 1);
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_closest_entry() {
        let sessions = names(&[DEFAULT_SESSION_NAME, "alpha", "beta", "gamma"]);
        assert_eq!(closest_entry(&sessions, "beta"), Some(2));
        assert_eq!(closest_entry(&sessions, "b"), Some(2));
        assert_eq!(closest_entry(&sessions, "zzz"), Some(3));
        assert_eq!(closest_entry(&[], "x"), None);
    }

    #[test]
    fn test_storage_name() {
        assert_eq!(storage_name(DEFAULT_SESSION_NAME), "");
        assert_eq!(storage_name("work"), "work");
    }
}
