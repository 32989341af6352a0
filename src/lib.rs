//! # Rctau Core
//!
//! The state model behind an RC circuit visualizer.
//!
//! This library provides:
//! - A validated, mutable [`CircuitState`] holding EMF, resistance,
//!   capacitance, and the switch position
//! - The derived RC time constant (τ = R × C), recomputed from the stored
//!   parameters on every read
//! - Change notification so a presentation layer can redraw after any
//!   successful mutation
//! - Parsing and display helpers for the electrical quantities involved
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit state, switch, parameter ranges, change events
//! - [`error`] - Unified error type for rejected mutations
//! - [`units`] - Value parsing with SI suffixes and quantity formatting
//!
//! The presentation layer (native window, terminal, or browser) is an
//! external collaborator: it reads values through the accessors, mutates
//! through the fallible setters, and registers a listener to learn when a
//! redraw is due. The core itself renders nothing and owns no event loop.
//!
//! ## Usage
//!
//! ```
//! use rctau_core::CircuitState;
//!
//! let mut state = CircuitState::new();
//! state.set_resistance(1000.0)?;   // ohms
//! state.set_capacitance(100.0)?;   // microfarads
//!
//! // τ = 1000 Ω × 100 μF = 0.1 s
//! assert!((state.time_constant() - 0.1).abs() < 1e-12);
//! # Ok::<(), rctau_core::RcError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! rctau --resistance 4.7k --capacitance 100 --closed
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuit } from 'rctau_core';
//!
//! const circuit = new WasmCircuit(10.0, 1000.0, 100.0);
//! circuit.set_resistance(2200.0);
//! display.textContent = circuit.time_constant_label();
//! ```
//!
//! ## Time Constant
//!
//! Resistance is stored in ohms and capacitance in microfarads, matching
//! the ranges a front end exposes to the user. The derived value is
//! reported in seconds:
//!
//! τ(s) = R(Ω) × C(μF) × 1e-6
//!
//! There is no transient simulation: the switch position selects which
//! loop a schematic would highlight (charging vs. discharging) but never
//! enters the arithmetic.

pub mod circuit;
pub mod error;
pub mod units;

// Re-export main types for convenience
pub use circuit::{ChangeEvent, CircuitState, Param, SwitchState};
pub use error::{RcError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;

/// One microfarad expressed in farads.
///
/// Capacitance is stored in μF; multiply by this to get farads before
/// combining with a resistance in ohms.
pub const MICROFARAD: f64 = 1e-6;
