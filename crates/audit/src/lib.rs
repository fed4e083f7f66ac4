// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents the operator performing a bulk operation.
///
/// An actor is any identifiable entity that triggers a bulk action or an
/// import run: a console operator, a scheduled job, or a system process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g. "operator", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents what triggered a bulk operation.
///
/// Bulk actions are user-triggered; the trigger records the request that
/// started the run so operations can be traced back to their origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// A unique identifier for this trigger (e.g. request ID).
    pub id: String,
    /// A description of the trigger.
    pub description: String,
}

impl Trigger {
    /// Creates a new Trigger.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this trigger
    /// * `description` - A description of what started this operation
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the bulk operation that was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAction {
    /// The name of the action (e.g. "`BulkDelete`", "`ImportGroups`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl BulkAction {
    /// Creates a new `BulkAction`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The per-row accounting of one bulk operation.
///
/// `attempted` counts every row or id the operation was asked to process;
/// `succeeded` plus `failed` must equal `attempted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    /// The number of rows or ids the operation was asked to process.
    pub attempted: u64,
    /// The number that completed successfully.
    pub succeeded: u64,
    /// The number that failed.
    pub failed: u64,
}

impl OutcomeTally {
    /// Creates a new tally.
    #[must_use]
    pub const fn new(attempted: u64, succeeded: u64, failed: u64) -> Self {
        Self {
            attempted,
            succeeded,
            failed,
        }
    }

    /// Checks the accounting invariant.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.succeeded + self.failed == self.attempted
    }
}

/// An immutable audit event for one completed bulk operation.
///
/// Every bulk delete and every import run must produce exactly one audit
/// event. Events are immutable once created and capture:
/// - Who triggered the operation (actor)
/// - Why it ran (trigger)
/// - What it did (action)
/// - How many rows succeeded and failed (tally)
/// - When it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who triggered this operation.
    pub actor: Actor,
    /// The trigger for this operation.
    pub trigger: Trigger,
    /// The operation that was performed.
    pub action: BulkAction,
    /// The per-row accounting.
    pub tally: OutcomeTally,
    /// When this event was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent` stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who triggered the operation
    /// * `trigger` - The reason the operation ran
    /// * `action` - The operation that was performed
    /// * `tally` - The per-row accounting
    #[must_use]
    pub fn new(actor: Actor, trigger: Trigger, action: BulkAction, tally: OutcomeTally) -> Self {
        Self {
            actor,
            trigger,
            action,
            tally,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("op-123"), String::from("operator"));

        assert_eq!(actor.id, "op-123");
        assert_eq!(actor.actor_type, "operator");
    }

    #[test]
    fn test_trigger_creation_requires_all_fields() {
        let trigger: Trigger = Trigger::new(String::from("req-456"), String::from("Bulk delete"));

        assert_eq!(trigger.id, "req-456");
        assert_eq!(trigger.description, "Bulk delete");
    }

    #[test]
    fn test_bulk_action_creation_with_details() {
        let action: BulkAction = BulkAction::new(
            String::from("ImportGroups"),
            Some(String::from("groups.csv")),
        );

        assert_eq!(action.name, "ImportGroups");
        assert_eq!(action.details, Some(String::from("groups.csv")));
    }

    #[test]
    fn test_tally_balance_invariant() {
        assert!(OutcomeTally::new(10, 7, 3).is_balanced());
        assert!(!OutcomeTally::new(10, 7, 2).is_balanced());
        assert!(OutcomeTally::new(0, 0, 0).is_balanced());
    }

    #[test]
    fn test_audit_event_captures_all_parts() {
        let actor: Actor = Actor::new(String::from("op-123"), String::from("operator"));
        let trigger: Trigger = Trigger::new(String::from("req-456"), String::from("Import"));
        let action: BulkAction = BulkAction::new(String::from("ImportMembers"), None);
        let tally: OutcomeTally = OutcomeTally::new(5, 4, 1);

        let event: AuditEvent =
            AuditEvent::new(actor.clone(), trigger.clone(), action.clone(), tally);

        assert_eq!(event.actor, actor);
        assert_eq!(event.trigger, trigger);
        assert_eq!(event.action, action);
        assert_eq!(event.tally, tally);
    }

    #[test]
    fn test_audit_event_equality_ignores_nothing() {
        let make = || {
            AuditEvent {
                actor: Actor::new(String::from("op"), String::from("operator")),
                trigger: Trigger::new(String::from("req"), String::from("why")),
                action: BulkAction::new(String::from("BulkDelete"), None),
                tally: OutcomeTally::new(3, 3, 0),
                recorded_at: OffsetDateTime::UNIX_EPOCH,
            }
        };

        assert_eq!(make(), make());
    }
}
