//! Compose form state machine.
//!
//! `Closed` --start--> `Open(draft)` --cancel--> `Closed`.
//! Submission goes through the controller, which closes the form only when
//! a post was actually created.

use super::PostKind;

/// Draft fields of an open compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub kind: PostKind,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposeForm {
    #[default]
    Closed,
    Open(Draft),
}

impl ComposeForm {
    pub fn is_open(&self) -> bool {
        matches!(self, ComposeForm::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            ComposeForm::Open(draft) => Some(draft),
            ComposeForm::Closed => None,
        }
    }

    /// Open the form with a default draft. Keeps the current draft if
    /// already open.
    pub fn start(&mut self) {
        if let ComposeForm::Closed = self {
            *self = ComposeForm::Open(Draft::default());
        }
    }

    /// Returns `false` when the form is closed.
    pub fn set_kind(&mut self, kind: PostKind) -> bool {
        match self {
            ComposeForm::Open(draft) => {
                draft.kind = kind;
                true
            }
            ComposeForm::Closed => false,
        }
    }

    /// Returns `false` when the form is closed.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        match self {
            ComposeForm::Open(draft) => {
                draft.content = content.into();
                true
            }
            ComposeForm::Closed => false,
        }
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = ComposeForm::Closed;
    }
}
