//! Circuit state and change notification.
//!
//! This module holds the mutable model a presentation layer drives: the
//! four user-adjustable parameters, the switch position, and the derived
//! time constant. All mutation goes through validated setters; every
//! successful mutation is announced to registered listeners.

mod observer;
mod params;
mod state;
mod switch;

pub use observer::{ChangeEvent, Listener};
pub use params::Param;
pub use state::CircuitState;
pub use switch::SwitchState;
