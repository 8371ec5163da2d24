//! Pending confirmation for destructive actions.

use crate::model::resource::ResourceRef;

/// Destructive action waiting for user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteSubject(String),
    DeleteResource(ResourceRef),
    ResetToSample,
}

/// Action plus the prompt shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    action: ConfirmAction,
    prompt: String,
}

impl PendingConfirmation {
    pub fn new(action: ConfirmAction) -> Self {
        let prompt = match &action {
            ConfirmAction::DeleteSubject(subject) => {
                format!("Delete subject \"{subject}\" and all its resources?")
            }
            ConfirmAction::DeleteResource(_) => "Delete this resource?".to_string(),
            ConfirmAction::ResetToSample => {
                "Reset to sample data? This will overwrite your saved resources.".to_string()
            }
        };
        Self { action, prompt }
    }

    pub fn action(&self) -> &ConfirmAction {
        &self.action
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_str()
    }

    pub fn into_action(self) -> ConfirmAction {
        self.action
    }
}
