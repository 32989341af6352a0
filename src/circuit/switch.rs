//! The circuit switch.

use std::fmt;

/// Position of the switch in the circuit.
///
/// Closed completes the charging loop (EMF → R → C); open leaves only the
/// discharging loop (R ↔ C). The position is purely qualitative: it tells
/// a schematic which loop to highlight but has no effect on the time
/// constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwitchState {
    /// Switch open, charging loop broken.
    #[default]
    Open,
    /// Switch closed, charging loop complete.
    Closed,
}

impl SwitchState {
    /// Build a switch state from the "is closed" flag a toggle button holds.
    pub fn from_closed(closed: bool) -> Self {
        if closed {
            SwitchState::Closed
        } else {
            SwitchState::Open
        }
    }

    /// Whether current may flow through the switch.
    pub fn is_closed(self) -> bool {
        matches!(self, SwitchState::Closed)
    }

    /// The opposite position.
    pub fn toggled(self) -> Self {
        match self {
            SwitchState::Open => SwitchState::Closed,
            SwitchState::Closed => SwitchState::Open,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchState::Open => write!(f, "OPEN"),
            SwitchState::Closed => write!(f, "CLOSED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let s = SwitchState::Open;
        assert_eq!(s.toggled(), SwitchState::Closed);
        assert_eq!(s.toggled().toggled(), SwitchState::Open);
    }

    #[test]
    fn test_from_closed() {
        assert!(SwitchState::from_closed(true).is_closed());
        assert!(!SwitchState::from_closed(false).is_closed());
    }

    #[test]
    fn test_display_matches_button_captions() {
        assert_eq!(SwitchState::Open.to_string(), "OPEN");
        assert_eq!(SwitchState::Closed.to_string(), "CLOSED");
    }
}
