use thiserror::Error;

use crate::ButtonId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab button has no style")]
    MissingStyle,

    #[error("tab button is not editable")]
    NotEditable,

    #[error("tab button is not being edited")]
    NotEditing,

    #[error("no tab button with id {0}")]
    UnknownButton(ButtonId),

    #[error("tab button {0} is disabled")]
    Disabled(ButtonId),

    #[error("tab strip has not been laid out, cannot place an editor over {0}")]
    NotLaidOut(ButtonId),
}

pub type Result<T> = std::result::Result<T, TabError>;
