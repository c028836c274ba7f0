//! In-memory implementations of the dialog collaborators.
//!
//! [`HeadlessDialog`] implements [`DialogOps`] without a toolkit: it keeps
//! each control's widget state in memory and records beeps, error messages
//! and the end result. The command-line front end drives the dialog through
//! it, and tests assert on what it recorded.
//!
//! [`MemorySessionStorage`] keeps saved sessions in a shared map.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use anyhow::anyhow;
use confbox_config::{Conf, DEFAULT_SESSION_NAME, Filename, FontSpec};

use crate::control::ControlId;
use crate::traits::{DialogOps, DialogResult, SessionStorage};

/// Widget state of one control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub text: String,
    pub radio: usize,
    pub checked: bool,
    /// List rows with their ids (0 for rows added without one)
    pub rows: Vec<(String, i32)>,
    pub selected: BTreeSet<usize>,
    pub filename: Filename,
    pub font: FontSpec,
    /// Label set through [`DialogOps::label_change`]
    pub label: Option<String>,
}

/// A dialog with no toolkit behind it.
#[derive(Debug, Default)]
pub struct HeadlessDialog {
    widgets: HashMap<ControlId, WidgetState>,
    updating: BTreeSet<ControlId>,
    unbracketed: Vec<ControlId>,
    focus: Option<ControlId>,
    previous_focus: Option<ControlId>,
    beeps: usize,
    errors: Vec<String>,
    result: Option<DialogResult>,
    colour_requests: Vec<(ControlId, [i32; 3])>,
    colour_answer: Option<[i32; 3]>,
}

impl HeadlessDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn widget(&self, ctrl: ControlId) -> Option<&WidgetState> {
        self.widgets.get(&ctrl)
    }

    fn widget_mut(&mut self, ctrl: ControlId) -> &mut WidgetState {
        self.widgets.entry(ctrl).or_default()
    }

    fn note_list_write(&mut self, ctrl: ControlId) {
        if !self.updating.contains(&ctrl) {
            log::debug!("List write on {ctrl:?} outside an update bracket");
            self.unbracketed.push(ctrl);
        }
    }

    // ------------------------------------------------------------------------
    // Recorded state
    // ------------------------------------------------------------------------

    pub fn state(&self, ctrl: ControlId) -> WidgetState {
        self.widget(ctrl).cloned().unwrap_or_default()
    }

    pub fn text(&self, ctrl: ControlId) -> String {
        self.widget(ctrl).map(|w| w.text.clone()).unwrap_or_default()
    }

    pub fn radio(&self, ctrl: ControlId) -> usize {
        self.widget(ctrl).map_or(0, |w| w.radio)
    }

    pub fn checked(&self, ctrl: ControlId) -> bool {
        self.widget(ctrl).is_some_and(|w| w.checked)
    }

    pub fn rows(&self, ctrl: ControlId) -> Vec<String> {
        self.widget(ctrl)
            .map(|w| w.rows.iter().map(|(text, _)| text.clone()).collect())
            .unwrap_or_default()
    }

    pub fn row_ids(&self, ctrl: ControlId) -> Vec<i32> {
        self.widget(ctrl)
            .map(|w| w.rows.iter().map(|(_, id)| *id).collect())
            .unwrap_or_default()
    }

    /// The single selected row.
    pub fn selection(&self, ctrl: ControlId) -> Option<usize> {
        self.listbox_index(ctrl)
    }

    pub fn filename(&self, ctrl: ControlId) -> Filename {
        self.widget(ctrl).map(|w| w.filename.clone()).unwrap_or_default()
    }

    pub fn font(&self, ctrl: ControlId) -> FontSpec {
        self.widget(ctrl).map(|w| w.font.clone()).unwrap_or_default()
    }

    pub fn label(&self, ctrl: ControlId) -> Option<String> {
        self.widget(ctrl).and_then(|w| w.label.clone())
    }

    pub fn beeps(&self) -> usize {
        self.beeps
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn result(&self) -> Option<DialogResult> {
        self.result
    }

    /// Lists written to outside an update bracket, in write order.
    pub fn unbracketed_writes(&self) -> &[ControlId] {
        &self.unbracketed
    }

    /// Colour pickers opened, with the colour each was seeded with.
    pub fn colour_requests(&self) -> &[(ControlId, [i32; 3])] {
        &self.colour_requests
    }

    /// Forget beeps, errors and the end result.
    pub fn clear_feedback(&mut self) {
        self.beeps = 0;
        self.errors.clear();
        self.result = None;
    }

    // ------------------------------------------------------------------------
    // Simulated user input
    // ------------------------------------------------------------------------

    /// Add `index` to a multi-selection.
    pub fn toggle_selection(&mut self, ctrl: ControlId, index: usize) {
        let selected = &mut self.widget_mut(ctrl).selected;
        if !selected.remove(&index) {
            selected.insert(index);
        }
    }

    pub fn clear_selection(&mut self, ctrl: ControlId) {
        self.widget_mut(ctrl).selected.clear();
    }

    /// Drag a row from one position to another.
    pub fn move_row(&mut self, ctrl: ControlId, from: usize, to: usize) {
        let rows = &mut self.widget_mut(ctrl).rows;
        if from < rows.len() && to < rows.len() {
            let row = rows.remove(from);
            rows.insert(to, row);
        }
    }

    pub fn remove_row(&mut self, ctrl: ControlId, index: usize) {
        let rows = &mut self.widget_mut(ctrl).rows;
        if index < rows.len() {
            rows.remove(index);
        }
    }

    pub fn push_row(&mut self, ctrl: ControlId, text: &str, id: i32) {
        self.widget_mut(ctrl).rows.push((text.to_string(), id));
    }

    /// What the next colour picker returns; `None` cancels it.
    pub fn set_colour_answer(&mut self, rgb: Option<[i32; 3]>) {
        self.colour_answer = rgb;
    }
}

impl DialogOps for HeadlessDialog {
    fn radiobutton_set(&mut self, ctrl: ControlId, index: usize) {
        self.widget_mut(ctrl).radio = index;
    }

    fn radiobutton_get(&self, ctrl: ControlId) -> usize {
        self.radio(ctrl)
    }

    fn checkbox_set(&mut self, ctrl: ControlId, checked: bool) {
        self.widget_mut(ctrl).checked = checked;
    }

    fn checkbox_get(&self, ctrl: ControlId) -> bool {
        self.checked(ctrl)
    }

    fn editbox_set(&mut self, ctrl: ControlId, text: &str) {
        self.widget_mut(ctrl).text = text.to_string();
    }

    fn editbox_get(&self, ctrl: ControlId) -> String {
        self.text(ctrl)
    }

    fn listbox_clear(&mut self, ctrl: ControlId) {
        self.note_list_write(ctrl);
        let w = self.widget_mut(ctrl);
        w.rows.clear();
        w.selected.clear();
    }

    fn listbox_del(&mut self, ctrl: ControlId, index: usize) {
        self.note_list_write(ctrl);
        let w = self.widget_mut(ctrl);
        if index < w.rows.len() {
            w.rows.remove(index);
            w.selected = w
                .selected
                .iter()
                .filter(|&&i| i != index)
                .map(|&i| if i > index { i - 1 } else { i })
                .collect();
        }
    }

    fn listbox_add(&mut self, ctrl: ControlId, text: &str) {
        self.listbox_add_with_id(ctrl, text, 0);
    }

    fn listbox_add_with_id(&mut self, ctrl: ControlId, text: &str, id: i32) {
        self.note_list_write(ctrl);
        self.widget_mut(ctrl).rows.push((text.to_string(), id));
    }

    fn listbox_getid(&self, ctrl: ControlId, index: usize) -> i32 {
        self.widget(ctrl)
            .and_then(|w| w.rows.get(index))
            .map_or(0, |(_, id)| *id)
    }

    fn listbox_count(&self, ctrl: ControlId) -> usize {
        self.widget(ctrl).map_or(0, |w| w.rows.len())
    }

    fn listbox_index(&self, ctrl: ControlId) -> Option<usize> {
        let w = self.widget(ctrl)?;
        match w.selected.len() {
            1 => w.selected.first().copied(),
            _ => None,
        }
    }

    fn listbox_issel(&self, ctrl: ControlId, index: usize) -> bool {
        self.widget(ctrl).is_some_and(|w| w.selected.contains(&index))
    }

    fn listbox_select(&mut self, ctrl: ControlId, index: usize) {
        let w = self.widget_mut(ctrl);
        w.selected.clear();
        if index < w.rows.len() {
            w.selected.insert(index);
        }
    }

    fn label_change(&mut self, ctrl: ControlId, label: &str) {
        self.widget_mut(ctrl).label = Some(label.to_string());
    }

    fn filesel_set(&mut self, ctrl: ControlId, file: &Filename) {
        self.widget_mut(ctrl).filename = file.clone();
    }

    fn filesel_get(&self, ctrl: ControlId) -> Filename {
        self.filename(ctrl)
    }

    fn fontsel_set(&mut self, ctrl: ControlId, font: &FontSpec) {
        self.widget_mut(ctrl).font = font.clone();
    }

    fn fontsel_get(&self, ctrl: ControlId) -> FontSpec {
        self.font(ctrl)
    }

    fn update_start(&mut self, ctrl: ControlId) {
        self.updating.insert(ctrl);
    }

    fn update_done(&mut self, ctrl: ControlId) {
        self.updating.remove(&ctrl);
    }

    fn set_focus(&mut self, ctrl: ControlId) {
        if self.focus != Some(ctrl) {
            self.previous_focus = self.focus;
            self.focus = Some(ctrl);
        }
    }

    fn last_focused(&self, ctrl: ControlId) -> Option<ControlId> {
        if self.focus == Some(ctrl) {
            self.previous_focus
        } else {
            self.focus
        }
    }

    fn error_msg(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn end(&mut self, result: DialogResult) {
        log::debug!("Dialog ended: {result:?}");
        self.result = Some(result);
    }

    fn coloursel_start(&mut self, ctrl: ControlId, rgb: [i32; 3]) {
        self.colour_requests.push((ctrl, rgb));
    }

    fn coloursel_results(&mut self, _ctrl: ControlId) -> Option<[i32; 3]> {
        self.colour_answer.take()
    }
}

// ============================================================================
// MemorySessionStorage
// ============================================================================

/// Saved sessions held in memory. Clones share the same map, so a test can
/// keep a handle while the dialog owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    sessions: Rc<RefCell<BTreeMap<String, Conf>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: &str, conf: Conf) {
        self.sessions.borrow_mut().insert(name.to_string(), conf);
    }

    pub fn get(&self, name: &str) -> Option<Conf> {
        self.sessions.borrow().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sessions.borrow().contains_key(name)
    }

    /// Make every save and delete fail, as a full disk would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self, name: &str) -> anyhow::Result<Conf> {
        match self.sessions.borrow().get(name) {
            Some(conf) => Ok(conf.clone()),
            None if name.is_empty() => Ok(Conf::default()),
            None => Err(anyhow!("no saved session named {name:?}")),
        }
    }

    fn save(&mut self, name: &str, conf: &Conf) -> anyhow::Result<()> {
        if self.fail_writes.get() {
            return Err(anyhow!("storage is read-only"));
        }
        self.insert(name, conf.clone());
        Ok(())
    }

    fn delete(&mut self, name: &str) -> anyhow::Result<()> {
        if self.fail_writes.get() {
            return Err(anyhow!("storage is read-only"));
        }
        self.sessions.borrow_mut().remove(name);
        Ok(())
    }

    fn enumerate(&self, include_default: bool) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        if include_default {
            names.push(DEFAULT_SESSION_NAME.to_string());
        }
        names.extend(self.sessions.borrow().keys().filter(|k| !k.is_empty()).cloned());
        Ok(names)
    }
}
