//! WASM bindings for Rctau Core.
//!
//! This module provides JavaScript-friendly bindings so a browser
//! presentation layer (canvas schematic, sliders) can drive the circuit
//! state directly.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'rctau_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit(10.0, 1000.0, 100.0);
//!
//! resistanceSlider.oninput = () => {
//!   circuit.set_resistance(Number(resistanceSlider.value));
//!   tauLabel.textContent = circuit.time_constant_label();
//! };
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::CircuitState;
use crate::units;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible handle to the circuit state.
///
/// Wraps the native [`CircuitState`]. Setters reject out-of-range values
/// with a JavaScript error carrying the same message the native error
/// displays; the stored state is untouched on rejection.
#[wasm_bindgen]
pub struct WasmCircuit {
    state: CircuitState,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create a circuit with the given EMF (V), resistance (Ω), and
    /// capacitance (μF). The switch starts open.
    #[wasm_bindgen(constructor)]
    pub fn new(emf: f64, resistance: f64, capacitance: f64) -> Result<WasmCircuit, JsValue> {
        let state = CircuitState::with_values(emf, resistance, capacitance)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCircuit { state })
    }

    /// Source EMF in volts.
    #[wasm_bindgen(getter)]
    pub fn emf(&self) -> f64 {
        self.state.emf()
    }

    /// Resistance in ohms.
    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> f64 {
        self.state.resistance()
    }

    /// Capacitance in microfarads.
    #[wasm_bindgen(getter)]
    pub fn capacitance(&self) -> f64 {
        self.state.capacitance()
    }

    /// Whether the switch is closed.
    #[wasm_bindgen(getter)]
    pub fn switch_closed(&self) -> bool {
        self.state.switch_closed()
    }

    /// The RC time constant in seconds.
    #[wasm_bindgen(getter)]
    pub fn time_constant(&self) -> f64 {
        self.state.time_constant()
    }

    /// Set the source EMF in volts [0-100].
    pub fn set_emf(&mut self, volts: f64) -> Result<(), JsValue> {
        self.state
            .set_emf(volts)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the resistance in ohms [1-10000].
    pub fn set_resistance(&mut self, ohms: f64) -> Result<(), JsValue> {
        self.state
            .set_resistance(ohms)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the capacitance in microfarads [1-10000].
    pub fn set_capacitance(&mut self, microfarads: f64) -> Result<(), JsValue> {
        self.state
            .set_capacitance(microfarads)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set the switch position.
    pub fn set_switch(&mut self, closed: bool) {
        self.state.set_switch(closed);
    }

    /// Flip the switch, returning true if it is now closed.
    pub fn toggle_switch(&mut self) -> bool {
        self.state.toggle_switch().is_closed()
    }

    /// The time constant formatted at a readable scale, e.g. "100.000 ms".
    pub fn time_constant_label(&self) -> String {
        units::format_time_constant(self.state.time_constant())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
