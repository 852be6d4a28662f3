//! Event Bus - central hub for cross-module communication
//!
//! Simulation systems emit events (hits, bounces, goals, match results) and
//! the logging system drains them once per frame.

use bevy::prelude::*;

use super::types::GameEvent;

/// Tick-stamped event for the event bus
#[derive(Debug, Clone, PartialEq)]
pub struct BusEvent {
    /// Simulation tick the event was emitted on
    pub tick: u64,
    /// The event data
    pub event: GameEvent,
}

/// Central event bus for cross-module communication
#[derive(Resource)]
pub struct EventBus {
    /// Events emitted since the last drain
    pending: Vec<BusEvent>,

    /// Ticks simulated since the session started
    tick: u64,

    /// Whether the bus is enabled (for testing/simulation)
    enabled: bool,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            tick: 0,
            enabled: true,
        }
    }

    /// Create a disabled event bus (events are dropped)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            tick: self.tick,
            event,
        });
    }

    /// Take all pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get the number of pending events
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Check if the bus is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Step the tick counter (called once per fixed tick)
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

/// Last system of every fixed tick
pub fn advance_event_tick(mut bus: ResMut<EventBus>) {
    bus.advance_tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.advance_tick();
        bus.advance_tick();

        bus.emit(GameEvent::Goal {
            player: PlayerId::One,
            score_one: 1,
            score_two: 0,
        });

        assert_eq!(bus.pending_count(), 1);

        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tick, 2);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_disabled_bus() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::WallBounce { y: 5 });
        assert_eq!(bus.pending_count(), 0);
        assert!(!bus.is_enabled());
    }
}
