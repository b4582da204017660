//! # Domain Invariants
//!
//! Invariants that MUST hold before and after every marketplace operation.
//!
//! - INVARIANT-1: Sold count within capacity
//! - INVARIANT-2: Capacity never decreases
//! - INVARIANT-3: Dense event ids

use super::entities::TicketEvent;
use super::registry::EventRegistry;
use super::value_objects::{EventId, U256};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// INVARIANT-1: Sold Count Within Capacity
///
/// `0 <= next_ticket_to_sell <= max_tickets`.
#[must_use]
pub fn check_capacity_invariant(event: &TicketEvent) -> bool {
    event.next_ticket_to_sell <= event.max_tickets
}

/// INVARIANT-2: Capacity Never Decreases
///
/// Compares an event's capacity before and after an update.
#[must_use]
pub fn check_monotonic_capacity_invariant(before: U256, after: U256) -> bool {
    after >= before
}

/// INVARIANT-3: Dense Event Ids
///
/// Iterated ids run 0, 1, 2, … and the registry size equals the next id.
#[must_use]
pub fn check_dense_ids_invariant(registry: &EventRegistry) -> bool {
    let mut expected = 0u64;
    for (event_id, _) in registry.iter() {
        if event_id != EventId::new(expected) {
            return false;
        }
        expected += 1;
    }
    registry.next_event_id() == EventId::new(expected)
}

/// Check all registry invariants at once.
#[must_use]
pub fn check_all_invariants(registry: &EventRegistry) -> InvariantCheckResult {
    let mut violations = Vec::new();

    for (event_id, event) in registry.iter() {
        if !check_capacity_invariant(event) {
            violations.push(InvariantViolation::OversoldEvent {
                event_id,
                sold: event.next_ticket_to_sell,
                capacity: event.max_tickets,
            });
        }
    }

    if !check_dense_ids_invariant(registry) {
        violations.push(InvariantViolation::SparseEventIds {
            next_event_id: registry.next_event_id(),
        });
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvariantCheckResult {
    /// Invariants that do not hold.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// True when every invariant holds.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A broken invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// More tickets sold than the event can hold.
    OversoldEvent {
        /// Offending event.
        event_id: EventId,
        /// Tickets sold.
        sold: U256,
        /// Event capacity.
        capacity: U256,
    },
    /// Event ids are not the dense sequence 0..n.
    SparseEventIds {
        /// Id the registry would assign next.
        next_event_id: EventId,
    },
}

// =============================================================================
// TESTS
// =============================================================================
