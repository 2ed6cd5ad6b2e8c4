//! Edit-session state machine.
//!
//! A sum type replaces the usual scatter of boolean flags (surface open,
//! editing id, request in flight): which commands are legal is decided by
//! the variant alone. The machine is pure - the collection store drives it
//! and performs the remote calls between [`begin_submit`](Session::begin_submit)
//! and [`finish`](Session::finish)/[`resume`](Session::resume).

use crate::validate::ValidationErrors;
use roster_types::{Draft, Field, User, UserId};
use thiserror::Error;

/// Why a submit could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No draft is open.
    #[error("no draft is open")]
    NotEditing,
    /// Another submit is still in flight.
    #[error("a submit is already in flight")]
    InFlight,
}

/// Discriminant-only view of the session, for read-only snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No edit surface open.
    Idle,
    /// A draft is being composed.
    Editing,
    /// A submit is in flight.
    Submitting,
}

/// State of the edit surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No edit surface open.
    #[default]
    Idle,
    /// A draft is being composed.
    Editing {
        /// The in-progress candidate record.
        draft: Draft,
        /// Id of the record being edited; `None` for an add.
        target: Option<UserId>,
        /// Field errors from the last rejected submit.
        errors: ValidationErrors,
    },
    /// A submit is in flight; the draft is frozen until it resolves.
    Submitting {
        /// The draft being committed.
        draft: Draft,
        /// Id of the record being edited; `None` for an add.
        target: Option<UserId>,
    },
}

impl Session {
    /// Create a session with no edit surface open.
    pub fn new() -> Self {
        Self::Idle
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Editing { .. } => Mode::Editing,
            Self::Submitting { .. } => Mode::Submitting,
        }
    }

    /// The open draft, if any.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } | Self::Submitting { draft, .. } => Some(draft),
        }
    }

    /// The id of the record being edited; `None` when idle or adding.
    pub fn target(&self) -> Option<UserId> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } | Self::Submitting { target, .. } => *target,
        }
    }

    /// Field errors from the last rejected submit (empty unless Editing).
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Editing { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Whether a submit is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Open an empty draft for a new record.
    ///
    /// Replaces any draft already being composed; ignored while a submit is
    /// in flight.
    pub fn start_add(&mut self) {
        if !self.is_submitting() {
            *self = Self::Editing {
                draft: Draft::new(),
                target: None,
                errors: ValidationErrors::new(),
            };
        }
    }

    /// Open a draft copied from an existing record.
    ///
    /// Replaces any draft already being composed; ignored while a submit is
    /// in flight.
    pub fn start_edit(&mut self, user: &User) {
        if !self.is_submitting() {
            *self = Self::Editing {
                draft: Draft::from_user(user),
                target: Some(user.id),
                errors: ValidationErrors::new(),
            };
        }
    }

    /// Discard the draft and close the edit surface.
    ///
    /// Also recovers a session stuck in Submitting when a submit future was
    /// dropped at its await point.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Merge one field value into the open draft; no-op outside Editing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if let Self::Editing { draft, .. } = self {
            draft.set(field, value);
        }
    }

    /// Record field errors from a rejected submit; no-op outside Editing.
    pub fn reject(&mut self, new_errors: ValidationErrors) {
        if let Self::Editing { errors, .. } = self {
            *errors = new_errors;
        }
    }

    /// Freeze the draft and move to Submitting.
    ///
    /// Returns a copy of the draft and the target id for the caller to
    /// dispatch. The session holds the draft so a failed attempt can resume
    /// editing without data loss.
    pub fn begin_submit(&mut self) -> Result<(Draft, Option<UserId>), SessionError> {
        match std::mem::take(self) {
            Self::Editing { draft, target, .. } => {
                *self = Self::Submitting {
                    draft: draft.clone(),
                    target,
                };
                Ok((draft, target))
            }
            state @ Self::Submitting { .. } => {
                *self = state;
                Err(SessionError::InFlight)
            }
            Self::Idle => Err(SessionError::NotEditing),
        }
    }

    /// Close the session after a confirmed submit.
    pub fn finish(&mut self) {
        if self.is_submitting() {
            *self = Self::Idle;
        }
    }

    /// Return to Editing after a failed submit, draft preserved for retry.
    pub fn resume(&mut self) {
        if let Self::Submitting { draft, target } = std::mem::take(self) {
            *self = Self::Editing {
                draft,
                target,
                errors: ValidationErrors::new(),
            };
        }
    }
}
