//! The circuit state and its derived time constant.

use std::fmt;

use crate::error::Result;
use crate::MICROFARAD;

use super::observer::{ChangeEvent, Listener};
use super::params::Param;
use super::switch::SwitchState;

/// The complete state of the RC circuit.
///
/// One instance exists for the lifetime of the application. Invariants:
/// every stored value lies within its parameter's range (the fallible
/// setters reject out-of-range input without touching the state), and the
/// time constant is never stored — [`CircuitState::time_constant`]
/// derives it from the current resistance and capacitance on every call.
pub struct CircuitState {
    /// Source EMF in volts.
    emf: f64,
    /// Resistance in ohms.
    resistance: f64,
    /// Capacitance in microfarads.
    capacitance: f64,
    /// Switch position.
    switch: SwitchState,
    /// Listeners notified after each successful mutation.
    listeners: Vec<Listener>,
}

impl CircuitState {
    /// Create a circuit at its default state: every numeric parameter at
    /// its range minimum and the switch open.
    pub fn new() -> Self {
        Self {
            emf: Param::Emf.min(),
            resistance: Param::Resistance.min(),
            capacitance: Param::Capacitance.min(),
            switch: SwitchState::Open,
            listeners: Vec::new(),
        }
    }

    /// Create a circuit with the given parameter values, switch open.
    ///
    /// Fails with a range error if any value is outside its parameter's
    /// closed interval.
    pub fn with_values(emf: f64, resistance: f64, capacitance: f64) -> Result<Self> {
        Ok(Self {
            emf: Param::Emf.check(emf)?,
            resistance: Param::Resistance.check(resistance)?,
            capacitance: Param::Capacitance.check(capacitance)?,
            switch: SwitchState::Open,
            listeners: Vec::new(),
        })
    }

    /// Source EMF in volts.
    pub fn emf(&self) -> f64 {
        self.emf
    }

    /// Resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Capacitance in microfarads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Current switch position.
    pub fn switch(&self) -> SwitchState {
        self.switch
    }

    /// Whether the switch is closed.
    pub fn switch_closed(&self) -> bool {
        self.switch.is_closed()
    }

    /// The RC time constant in seconds: τ = R(Ω) × C(μF) × 1e-6.
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance * MICROFARAD
    }

    /// Set the source EMF in volts.
    ///
    /// EMF does not enter the time constant; the stored value only feeds
    /// the presentation layer's labels.
    pub fn set_emf(&mut self, volts: f64) -> Result<()> {
        self.emf = Param::Emf.check(volts)?;
        self.notify(ChangeEvent::Emf(volts));
        Ok(())
    }

    /// Set the resistance in ohms.
    pub fn set_resistance(&mut self, ohms: f64) -> Result<()> {
        self.resistance = Param::Resistance.check(ohms)?;
        self.notify(ChangeEvent::Resistance(ohms));
        Ok(())
    }

    /// Set the capacitance in microfarads.
    pub fn set_capacitance(&mut self, microfarads: f64) -> Result<()> {
        self.capacitance = Param::Capacitance.check(microfarads)?;
        self.notify(ChangeEvent::Capacitance(microfarads));
        Ok(())
    }

    /// Set the switch position from a toggle button's "checked" flag.
    pub fn set_switch(&mut self, closed: bool) {
        self.switch = SwitchState::from_closed(closed);
        self.notify(ChangeEvent::Switch(self.switch));
    }

    /// Flip the switch, returning the new position.
    pub fn toggle_switch(&mut self) -> SwitchState {
        self.switch = self.switch.toggled();
        self.notify(ChangeEvent::Switch(self.switch));
        self.switch
    }

    /// Register a listener invoked after every successful mutation.
    ///
    /// Listeners run synchronously on the mutating thread, in registration
    /// order. A rejected mutation emits nothing.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: ChangeEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for CircuitState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircuitState")
            .field("emf", &self.emf)
            .field("resistance", &self.resistance)
            .field("capacitance", &self.capacitance)
            .field("switch", &self.switch)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::RcError;

    #[test]
    fn test_default_time_constant() {
        // EMF=0, R=1, C=1, switch open
        let state = CircuitState::new();
        assert_relative_eq!(state.time_constant(), 1e-6);
        assert_eq!(state.switch(), SwitchState::Open);
    }

    #[test]
    fn test_time_constant_formula() {
        let mut state = CircuitState::new();
        state.set_resistance(1000.0).unwrap();
        state.set_capacitance(100.0).unwrap();
        // τ = 1000 Ω × 100 μF = 0.1 s
        assert_relative_eq!(state.time_constant(), 0.1);
    }

    #[test]
    fn test_time_constant_tracks_stored_values() {
        let mut state = CircuitState::with_values(10.0, 470.0, 22.0).unwrap();
        assert_relative_eq!(state.time_constant(), 470.0 * 22.0 * 1e-6);

        state.set_resistance(10_000.0).unwrap();
        state.set_capacitance(10_000.0).unwrap();
        assert_relative_eq!(state.time_constant(), 100.0);
    }

    #[test]
    fn test_emf_does_not_affect_time_constant() {
        let mut state = CircuitState::new();
        let tau = state.time_constant();
        state.set_emf(50.0).unwrap();
        assert_eq!(state.time_constant(), tau);
        assert_relative_eq!(state.emf(), 50.0);
    }

    #[test]
    fn test_switch_does_not_affect_time_constant() {
        let mut state = CircuitState::new();
        let tau = state.time_constant();
        state.set_switch(true);
        assert_eq!(state.time_constant(), tau);
        state.toggle_switch();
        assert_eq!(state.time_constant(), tau);
        assert!(!state.switch_closed());
    }

    #[test]
    fn test_rejected_resistance_leaves_state_unchanged() {
        let mut state = CircuitState::new();
        state.set_resistance(1000.0).unwrap();

        for bad in [0.0, 10_001.0] {
            let err = state.set_resistance(bad).unwrap_err();
            assert!(matches!(
                err,
                RcError::RangeError {
                    param: Param::Resistance,
                    ..
                }
            ));
            assert_relative_eq!(state.resistance(), 1000.0);
        }
    }

    #[test]
    fn test_rejected_capacitance_leaves_state_unchanged() {
        let mut state = CircuitState::new();
        state.set_capacitance(100.0).unwrap();

        for bad in [0.0, 10_001.0] {
            let err = state.set_capacitance(bad).unwrap_err();
            assert!(matches!(
                err,
                RcError::RangeError {
                    param: Param::Capacitance,
                    ..
                }
            ));
            assert_relative_eq!(state.capacitance(), 100.0);
        }
    }

    #[test]
    fn test_rejected_emf_leaves_state_unchanged() {
        let mut state = CircuitState::new();
        state.set_emf(10.0).unwrap();

        for bad in [-1.0, 100.5, f64::NAN] {
            assert!(state.set_emf(bad).is_err());
            assert_relative_eq!(state.emf(), 10.0);
        }
    }

    #[test]
    fn test_boundary_values_accepted() {
        let mut state = CircuitState::new();
        state.set_emf(0.0).unwrap();
        state.set_emf(100.0).unwrap();
        state.set_resistance(1.0).unwrap();
        state.set_resistance(10_000.0).unwrap();
        state.set_capacitance(1.0).unwrap();
        state.set_capacitance(10_000.0).unwrap();
    }

    #[test]
    fn test_with_values_validates_all_parameters() {
        assert!(CircuitState::with_values(10.0, 1000.0, 100.0).is_ok());
        assert!(CircuitState::with_values(101.0, 1000.0, 100.0).is_err());
        assert!(CircuitState::with_values(10.0, 0.5, 100.0).is_err());
        assert!(CircuitState::with_values(10.0, 1000.0, 20_000.0).is_err());
    }

    #[test]
    fn test_listener_sees_each_successful_mutation() {
        let events: Rc<RefCell<Vec<ChangeEvent>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut state = CircuitState::new();
        state.subscribe(move |event| sink.borrow_mut().push(*event));

        state.set_emf(10.0).unwrap();
        state.set_resistance(1000.0).unwrap();
        state.set_capacitance(100.0).unwrap();
        state.set_switch(true);

        let seen = events.borrow();
        assert_eq!(
            *seen,
            vec![
                ChangeEvent::Emf(10.0),
                ChangeEvent::Resistance(1000.0),
                ChangeEvent::Capacitance(100.0),
                ChangeEvent::Switch(SwitchState::Closed),
            ]
        );
    }

    #[test]
    fn test_listener_not_called_on_rejection() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut state = CircuitState::new();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(state.set_resistance(0.0).is_err());
        assert!(state.set_capacitance(10_001.0).is_err());
        assert_eq!(*count.borrow(), 0);

        state.set_resistance(220.0).unwrap();
        assert_eq!(*count.borrow(), 1);
    }
}
