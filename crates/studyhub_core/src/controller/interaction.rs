//! Event-driven controller over catalog, selection, filter and dialogs.

use crate::controller::confirm::{ConfirmAction, PendingConfirmation};
use crate::model::catalog::{Catalog, CatalogError};
use crate::model::form::{FormValidationError, ResourceForm};
use crate::model::resource::{Resource, ResourceRef};
use crate::repo::catalog_store::CatalogPersistence;
use crate::service::catalog_service::{CatalogService, CatalogServiceError};
use crate::session::dialog::{DialogSession, DialogState};
use crate::session::theme::{Theme, ThemePersistence, ThemeSession};
use crate::view::projection::{CatalogView, Selection};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors surfaced to the UI by controller events.
#[derive(Debug)]
pub enum ControllerError {
    /// Dialog form violates a rule; dialog stays open.
    Validation(FormValidationError),
    /// Target subject or resource does not exist.
    Catalog(CatalogError),
    /// Commit failed; catalog rolled back.
    Service(CatalogServiceError),
    DialogAlreadyOpen,
    DialogNotOpen,
    /// A destructive action is awaiting `confirm()` or `dismiss()`.
    ConfirmationPending,
    NothingToConfirm,
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
            Self::DialogAlreadyOpen => write!(f, "a dialog is already open"),
            Self::DialogNotOpen => write!(f, "no dialog is open"),
            Self::ConfirmationPending => write!(f, "a confirmation is already pending"),
            Self::NothingToConfirm => write!(f, "no action is waiting for confirmation"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormValidationError> for ControllerError {
    fn from(value: FormValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CatalogError> for ControllerError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<CatalogServiceError> for ControllerError {
    fn from(value: CatalogServiceError) -> Self {
        match value {
            CatalogServiceError::Catalog(err) => Self::Catalog(err),
            other => Self::Service(other),
        }
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Application state plus the event handlers that drive it.
pub struct Controller<P: CatalogPersistence + ThemePersistence> {
    service: CatalogService<P>,
    selection: Selection,
    filter: String,
    dialog: DialogSession,
    pending: Option<PendingConfirmation>,
    theme: ThemeSession,
}

impl<P: CatalogPersistence + ThemePersistence> Controller<P> {
    /// Loads catalog and theme from `persistence` and starts on the "all" view.
    pub fn new(persistence: P) -> Self {
        let theme = ThemeSession::restore(&persistence);
        Self {
            service: CatalogService::new(persistence),
            selection: Selection::All,
            filter: String::new(),
            dialog: DialogSession::default(),
            pending: None,
            theme,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.service.catalog()
    }

    pub fn persistence(&self) -> &P {
        self.service.persistence()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filter(&self) -> &str {
        self.filter.as_str()
    }

    pub fn dialog(&self) -> &DialogSession {
        &self.dialog
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Full recompute of the visible state.
    pub fn view(&self) -> CatalogView {
        CatalogView::build(self.catalog(), &self.selection, self.filter.as_str())
    }

    /// Sidebar click: toggles between `subject` and the "all" view.
    pub fn click_subject(&mut self, subject: &str) -> ControllerResult<()> {
        if !self.catalog().contains_subject(subject) {
            return Err(CatalogError::SubjectNotFound(subject.to_string()).into());
        }
        self.selection = self.selection.toggled(subject);
        debug!(
            "event=select_subject module=controller status=ok all={}",
            self.selection == Selection::All
        );
        Ok(())
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Add-subject control. Blank input is ignored and returns `false`.
    ///
    /// A pending confirmation is dropped before the commit.
    pub fn add_subject(&mut self, input: &str) -> ControllerResult<bool> {
        let name = input.trim();
        if name.is_empty() {
            return Ok(false);
        }
        self.drop_pending("add_subject");
        Ok(self.service.add_subject(name)?)
    }

    /// Opens the dialog for a new resource.
    pub fn open_add(&mut self) -> ControllerResult<()> {
        self.ensure_idle()?;
        self.dialog.open_for_add();
        Ok(())
    }

    /// Opens the dialog pre-filled from the resource at `target`.
    pub fn open_edit(&mut self, target: ResourceRef) -> ControllerResult<()> {
        self.ensure_idle()?;
        let resource = self.catalog().resource(&target)?;
        let prefill = ResourceForm::new(
            target.subject.clone(),
            resource.name.clone(),
            resource.url.clone(),
        );
        self.dialog.open_for_edit(target, prefill);
        Ok(())
    }

    /// Mutable access to the pending dialog form.
    pub fn form_mut(&mut self) -> ControllerResult<&mut ResourceForm> {
        if !self.dialog.is_open() {
            return Err(ControllerError::DialogNotOpen);
        }
        Ok(self.dialog.form_mut())
    }

    /// Replaces all pending dialog fields at once.
    pub fn set_form(&mut self, form: ResourceForm) -> ControllerResult<()> {
        *self.form_mut()? = form;
        Ok(())
    }

    /// Submits the dialog using the save path chosen at open time.
    ///
    /// Returns the reference of the saved resource, or `None` when no dialog
    /// was open. On error the dialog stays open with its form intact.
    pub fn save_dialog(&mut self) -> ControllerResult<Option<ResourceRef>> {
        let saved = match self.dialog.state().clone() {
            DialogState::Closed => {
                self.dialog.close();
                return Ok(None);
            }
            DialogState::OpenForAdd => {
                let form = self
                    .dialog
                    .form()
                    .validate_for_add()
                    .inspect_err(|err| log_rejected("add", *err))?;
                self.service.add_resource(
                    form.subject.as_str(),
                    Resource::new(form.name, form.url),
                )?
            }
            DialogState::OpenForEdit(target) => {
                let form = self
                    .dialog
                    .form()
                    .validate_for_edit()
                    .inspect_err(|err| log_rejected("edit", *err))?;
                self.service.edit_resource(
                    &target,
                    form.subject.as_str(),
                    form.name.as_str(),
                    form.url.as_str(),
                )?
            }
        };

        self.dialog.close();
        self.drop_pending("save_dialog");
        self.reconcile_selection();
        Ok(Some(saved))
    }

    /// Closes the dialog without side effects.
    pub fn cancel_dialog(&mut self) {
        self.dialog.close();
    }

    pub fn request_delete_subject(
        &mut self,
        subject: &str,
    ) -> ControllerResult<&PendingConfirmation> {
        if !self.catalog().contains_subject(subject) {
            return Err(CatalogError::SubjectNotFound(subject.to_string()).into());
        }
        self.request(ConfirmAction::DeleteSubject(subject.to_string()))
    }

    pub fn request_delete_resource(
        &mut self,
        target: ResourceRef,
    ) -> ControllerResult<&PendingConfirmation> {
        self.catalog().resource(&target)?;
        self.request(ConfirmAction::DeleteResource(target))
    }

    pub fn request_reset_to_sample(&mut self) -> ControllerResult<&PendingConfirmation> {
        self.request(ConfirmAction::ResetToSample)
    }

    /// Performs the pending destructive action.
    pub fn confirm(&mut self) -> ControllerResult<ConfirmAction> {
        let action = self
            .pending
            .take()
            .ok_or(ControllerError::NothingToConfirm)?
            .into_action();

        match &action {
            ConfirmAction::DeleteSubject(subject) => {
                self.service.delete_subject(subject.as_str())?;
            }
            ConfirmAction::DeleteResource(target) => {
                self.service.delete_resource(target)?;
            }
            ConfirmAction::ResetToSample => {
                self.service.reset_to_sample()?;
                self.selection = Selection::All;
            }
        }

        self.reconcile_selection();
        Ok(action)
    }

    /// Drops the pending destructive action.
    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    /// Escape key: closes the dialog, else the confirmation, else the selection.
    pub fn press_escape(&mut self) {
        if self.dialog.is_open() {
            self.dialog.close();
        } else if self.pending.is_some() {
            self.pending = None;
        } else {
            self.selection = Selection::All;
        }
    }

    /// Flips and persists the theme; write failures are only logged.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(self.service.persistence())
    }

    /// Dialog and confirmation are mutually exclusive modals, so a captured
    /// `ResourceRef` cannot be shifted by another commit before it is used.
    fn request(&mut self, action: ConfirmAction) -> ControllerResult<&PendingConfirmation> {
        if self.dialog.is_open() {
            return Err(ControllerError::DialogAlreadyOpen);
        }
        Ok(self.pending.insert(PendingConfirmation::new(action)))
    }

    fn ensure_idle(&self) -> ControllerResult<()> {
        if self.dialog.is_open() {
            return Err(ControllerError::DialogAlreadyOpen);
        }
        if self.pending.is_some() {
            return Err(ControllerError::ConfirmationPending);
        }
        Ok(())
    }

    fn drop_pending(&mut self, op: &'static str) {
        if self.pending.take().is_some() {
            info!("event=confirm_dropped module=controller status=ok op={op}");
        }
    }

    fn reconcile_selection(&mut self) {
        if let Selection::Subject(subject) = &self.selection {
            if !self.service.catalog().contains_subject(subject.as_str()) {
                info!("event=select_subject module=controller status=reset reason=subject_removed");
                self.selection = Selection::All;
            }
        }
    }
}

fn log_rejected(mode: &'static str, err: FormValidationError) {
    info!("event=dialog_save module=controller status=rejected mode={mode} rule={err:?}");
}
