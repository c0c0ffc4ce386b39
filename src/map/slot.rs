use crate::domain::PositionId;

use super::MapOverlay;

/// Handle for one in-flight border lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTicket {
    generation: u64,
}

/// Overlay currently shown by the map view.
///
/// Each focus change invalidates earlier tickets, so a lookup that finishes
/// after the user moved on is dropped instead of drawing a stale border.
#[derive(Debug, Default)]
pub struct OverlaySlot {
    generation: u64,
    focused: Option<PositionId>,
    overlay: Option<MapOverlay>,
}

impl OverlaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `position_id`; clears the previous overlay
    pub fn focus(&mut self, position_id: PositionId) -> FocusTicket {
        self.generation += 1;
        self.focused = Some(position_id);
        self.overlay = None;
        FocusTicket {
            generation: self.generation,
        }
    }

    /// Deliver the result of a lookup.
    ///
    /// # Returns
    /// * `true` if the overlay was stored
    /// * `false` if the ticket is stale and the overlay was discarded
    pub fn complete(&mut self, ticket: FocusTicket, overlay: MapOverlay) -> bool {
        if ticket.generation != self.generation || self.focused.is_none() {
            log::debug!(
                "Discarding stale overlay (ticket {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.overlay = Some(overlay);
        true
    }

    /// Drop the overlay and focus, invalidating outstanding tickets
    pub fn reset(&mut self) {
        self.generation += 1;
        self.focused = None;
        self.overlay = None;
    }

    pub fn current(&self) -> Option<&MapOverlay> {
        self.overlay.as_ref()
    }

    pub fn focused(&self) -> Option<&PositionId> {
        self.focused.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Polygon, Vertex};

    fn overlay_at(lat: f64) -> MapOverlay {
        MapOverlay::from_polygon(Polygon::new(vec![Vertex::new(lat, 0.0)]))
    }

    #[test]
    fn test_complete_current_focus() {
        let mut slot = OverlaySlot::new();
        let ticket = slot.focus(PositionId::from(1));

        assert!(slot.complete(ticket, overlay_at(1.0)));
        assert_eq!(slot.current(), Some(&overlay_at(1.0)));
        assert_eq!(slot.focused(), Some(&PositionId::from(1)));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut slot = OverlaySlot::new();
        let first = slot.focus(PositionId::from(1));
        let second = slot.focus(PositionId::from(2));

        assert!(!slot.complete(first, overlay_at(1.0)));
        assert!(slot.current().is_none());

        assert!(slot.complete(second, overlay_at(2.0)));
        assert_eq!(slot.current(), Some(&overlay_at(2.0)));
    }

    #[test]
    fn test_reset_discards_in_flight_lookup() {
        let mut slot = OverlaySlot::new();
        let ticket = slot.focus(PositionId::from(1));
        assert!(slot.complete(ticket, overlay_at(1.0)));

        slot.reset();
        assert!(slot.current().is_none());
        assert!(slot.focused().is_none());
        assert!(!slot.complete(ticket, overlay_at(1.0)));
    }
}
