//! Parsing and formatting of electrical quantities.
//!
//! Parsing accepts the compact notation electronics catalogs use
//! ("4.7k", "100u"). Formatting picks the scale a person would write on a
//! schematic label: kΩ above a kilohm, and s / ms / μs for the time
//! constant depending on magnitude.

/// Parse a numeric string with an optional SI scale suffix.
///
/// Recognized suffixes: `n`, `u`/`µ`, `m`, `k`/`K`, `M`. The suffix is a
/// plain scale factor on whatever unit the caller works in, so `"4.7k"`
/// parses to `4700.0` whether that means ohms or microfarads.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    let last = text.chars().last()?;

    let multiplier = match last {
        'n' => 1e-9,
        'u' | 'µ' => 1e-6,
        'm' => 1e-3,
        'k' | 'K' => 1e3,
        'M' => 1e6,
        _ => 1.0,
    };

    let digits = if multiplier != 1.0 {
        &text[..text.len() - last.len_utf8()]
    } else {
        text
    };

    digits.parse::<f64>().ok().map(|v| v * multiplier)
}

/// Format a time constant in seconds at a readable scale.
pub fn format_time_constant(tau_seconds: f64) -> String {
    if tau_seconds >= 1.0 {
        format!("{tau_seconds:.3} s")
    } else if tau_seconds >= 1e-3 {
        format!("{:.3} ms", tau_seconds * 1e3)
    } else {
        format!("{:.3} μs", tau_seconds * 1e6)
    }
}

/// Format a resistance in ohms, switching to kΩ at a kilohm.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1000.0 {
        format!("{:.1} kΩ", ohms / 1000.0)
    } else {
        format!("{ohms:.1} Ω")
    }
}

/// Format a capacitance stored in microfarads.
pub fn format_capacitance(microfarads: f64) -> String {
    format!("{microfarads:.1} μF")
}

/// Format a source EMF in volts.
pub fn format_emf(volts: f64) -> String {
    format!("{volts:.1} V")
}
