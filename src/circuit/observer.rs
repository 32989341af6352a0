//! Change notification.
//!
//! The presentation layer registers listeners on the state; after every
//! successful mutation the state calls each listener with the event
//! describing what was stored. Dispatch is synchronous on the caller's
//! thread, matching the single-threaded UI event loop that drives it.

use super::switch::SwitchState;

/// Event emitted after a successful mutation, carrying the stored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeEvent {
    /// EMF was set, in volts.
    Emf(f64),
    /// Resistance was set, in ohms.
    Resistance(f64),
    /// Capacitance was set, in microfarads.
    Capacitance(f64),
    /// Switch moved to the given position.
    Switch(SwitchState),
}

impl ChangeEvent {
    /// Whether this event can change the derived time constant.
    ///
    /// Only resistance and capacitance enter τ = R × C, so a renderer that
    /// caches its time-constant label may skip re-deriving it for EMF and
    /// switch events.
    pub fn affects_time_constant(&self) -> bool {
        matches!(self, ChangeEvent::Resistance(_) | ChangeEvent::Capacitance(_))
    }
}

/// A boxed state-change listener.
pub type Listener = Box<dyn FnMut(&ChangeEvent)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affects_time_constant() {
        assert!(ChangeEvent::Resistance(1000.0).affects_time_constant());
        assert!(ChangeEvent::Capacitance(100.0).affects_time_constant());
        assert!(!ChangeEvent::Emf(10.0).affects_time_constant());
        assert!(!ChangeEvent::Switch(SwitchState::Closed).affects_time_constant());
    }
}
