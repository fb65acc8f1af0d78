//! Transient dock tooltips.
//!
//! At most one tooltip is active per dock instance. The scheduler holds the
//! visibility state but never owns a timer: the dock that mounts it schedules
//! the expiry callback, which keeps pending timers scoped to their owner and
//! cancelled on teardown.

use std::time::{Duration, Instant};

/// How long a dock tooltip stays visible after activation.
pub const TOOLTIP_VISIBLE_FOR: Duration = Duration::from_millis(2000);

/// Handle for one scheduled expiry.
///
/// Expiring a superseded ticket is a no-op, which is what makes a stale
/// timer from an earlier activation harmless.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TooltipTicket {
    label: String,
    seq: u64,
}

impl TooltipTicket {
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug)]
struct ActiveTooltip {
    label: String,
    expires_at: Instant,
    seq: u64,
}

/// Single-flight tooltip visibility for one dock.
#[derive(Debug, Default)]
pub struct TooltipScheduler {
    active: Option<ActiveTooltip>,
    last_seq: u64,
}

impl TooltipScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `label`, replacing any currently active tooltip
    /// (last-activation-wins, no queueing). Re-activating the same label
    /// resets its deadline.
    ///
    /// The caller schedules a timer for [`TOOLTIP_VISIBLE_FOR`] and hands the
    /// ticket back to [`expire`](Self::expire) when it fires.
    pub fn show(&mut self, label: &str, now: Instant) -> TooltipTicket {
        self.last_seq += 1;
        self.active = Some(ActiveTooltip {
            label: label.to_string(),
            expires_at: now + TOOLTIP_VISIBLE_FOR,
            seq: self.last_seq,
        });
        TooltipTicket {
            label: label.to_string(),
            seq: self.last_seq,
        }
    }

    /// Clear the tooltip named by `ticket`, unless a newer activation has
    /// superseded it.
    pub fn expire(&mut self, ticket: &TooltipTicket) {
        if self.active.as_ref().is_some_and(|a| a.seq == ticket.seq) {
            self.active = None;
        }
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.label.as_str())
    }

    /// Deadline of the active tooltip, if any.
    pub fn expires_at(&self) -> Option<Instant> {
        self.active.as_ref().map(|a| a.expires_at)
    }

    /// Drop any active tooltip immediately (owner teardown).
    pub fn clear(&mut self) {
        self.active = None;
    }
}
