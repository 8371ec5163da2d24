//! Resource dialog state machine.
//!
//! States: `Closed`, `OpenForAdd`, `OpenForEdit(ref)`. The open reason
//! selects which save path runs when the dialog is submitted.

use crate::model::form::ResourceForm;
use crate::model::resource::ResourceRef;

/// Why the dialog is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    OpenForAdd,
    OpenForEdit(ResourceRef),
}

/// Dialog state plus its pending, not yet validated form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogSession {
    state: DialogState,
    form: ResourceForm,
}

impl DialogSession {
    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DialogState::Closed)
    }

    pub fn form(&self) -> &ResourceForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ResourceForm {
        &mut self.form
    }

    pub fn open_for_add(&mut self) {
        self.state = DialogState::OpenForAdd;
        self.form = ResourceForm::default();
    }

    /// Opens for editing with fields pre-filled from the target resource.
    pub fn open_for_edit(&mut self, target: ResourceRef, prefill: ResourceForm) {
        self.state = DialogState::OpenForEdit(target);
        self.form = prefill;
    }

    /// Closes and discards the pending form.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
        self.form = ResourceForm::default();
    }
}
