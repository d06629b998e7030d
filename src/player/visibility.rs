//! Auto-hide bookkeeping for the control bar.
//!
//! The state machine only hands out tickets; the caller owns the actual
//! timer and reports back with the ticket when it fires. A ticket is only
//! honoured if no newer one has been issued since, so a burst of pointer
//! movement never hides the controls early.

/// Token identifying one scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsVisibility {
    visible: bool,
    generation: u64,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            generation: 0,
        }
    }
}

impl ControlsVisibility {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the controls and start a fresh hide countdown.
    pub fn activity(&mut self) -> HideTicket {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        HideTicket(self.generation)
    }

    /// Timer callback. Hides only for the latest ticket while playing.
    pub fn elapsed(&mut self, ticket: HideTicket, is_playing: bool) -> bool {
        if ticket.0 != self.generation || !is_playing {
            return false;
        }
        self.visible = false;
        true
    }

    /// Pointer left the player area.
    pub fn pointer_left(&mut self, is_playing: bool) {
        if is_playing {
            self.cancel();
            self.visible = false;
        }
    }

    /// Show and stay shown, e.g. while paused or a menu is open.
    pub fn pin(&mut self) {
        self.cancel();
        self.visible = true;
    }

    /// Invalidate any outstanding ticket without changing visibility.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_timer_while_playing() {
        let mut vis = ControlsVisibility::default();
        let ticket = vis.activity();
        assert!(vis.elapsed(ticket, true));
        assert!(!vis.is_visible());
    }

    #[test]
    fn stays_visible_while_paused() {
        let mut vis = ControlsVisibility::default();
        let ticket = vis.activity();
        assert!(!vis.elapsed(ticket, false));
        assert!(vis.is_visible());
    }

    #[test]
    fn newer_activity_supersedes_old_ticket() {
        let mut vis = ControlsVisibility::default();
        let first = vis.activity();
        let second = vis.activity();
        assert!(!vis.elapsed(first, true));
        assert!(vis.is_visible());
        assert!(vis.elapsed(second, true));
    }

    #[test]
    fn activity_reveals_hidden_controls() {
        let mut vis = ControlsVisibility::default();
        let ticket = vis.activity();
        vis.elapsed(ticket, true);
        vis.activity();
        assert!(vis.is_visible());
    }

    #[test]
    fn pointer_leave_hides_only_while_playing() {
        let mut vis = ControlsVisibility::default();
        vis.pointer_left(false);
        assert!(vis.is_visible());
        vis.pointer_left(true);
        assert!(!vis.is_visible());
    }

    #[test]
    fn pin_invalidates_pending_ticket() {
        let mut vis = ControlsVisibility::default();
        let ticket = vis.activity();
        vis.pin();
        assert!(!vis.elapsed(ticket, true));
        assert!(vis.is_visible());
    }
}
