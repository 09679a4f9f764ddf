// ── Mutation tracker ──
//
// One small state machine per RESOURCE (not per item): records whether a
// write is in flight, whether it failed, and a transient success signal.
// Two concurrent mutations on different items of the same resource share
// this state; a UI must respect that by disabling bulk concurrent
// actions or visibly coupling their spinners.

use serde::Serialize;

use crate::model::EntityId;

/// What kind of write is (or was) in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OperationKind {
    Create,
    Update,
    Delete,
    Toggle,
    Reorder,
}

/// Mutation lifecycle: `Idle → Pending → {Success, Failed}`.
///
/// `Pending` carries the operation kind and (where known) the targeted
/// item, so a UI can disambiguate WHICH item is pending even though the
/// flag itself is resource-scoped. `Success` is transient: the
/// auto-clear timer is owned by the consumer, the store only guarantees
/// [`clear_success`](Self::clear_success) is idempotent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum ActionState {
    #[default]
    Idle,
    Pending {
        kind: OperationKind,
        target: Option<EntityId>,
    },
    Success {
        kind: OperationKind,
    },
    Failed {
        kind: OperationKind,
        message: String,
    },
}

impl ActionState {
    pub(crate) fn pending(kind: OperationKind, target: Option<EntityId>) -> Self {
        Self::Pending { kind, target }
    }

    pub(crate) fn success(kind: OperationKind) -> Self {
        Self::Success { kind }
    }

    pub(crate) fn failed(kind: OperationKind, message: String) -> Self {
        Self::Failed { kind, message }
    }

    /// A write is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// The last write succeeded and the success signal has not been
    /// cleared yet.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The last write's error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Drop a lingering success signal. Safe to call any number of
    /// times; returns `true` if the state changed.
    pub(crate) fn clear_success(&mut self) -> bool {
        if matches!(self, Self::Success { .. }) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    /// Drop a lingering error. Same idempotency contract as
    /// [`clear_success`](Self::clear_success).
    pub(crate) fn clear_error(&mut self) -> bool {
        if matches!(self, Self::Failed { .. }) {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }
}
