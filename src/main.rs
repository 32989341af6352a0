//! Rctau - RC Circuit Time Constant Calculator
//!
//! Terminal front end for the circuit state core.
//!
//! # Usage
//!
//! ```bash
//! rctau --emf 10 --resistance 4.7k --capacitance 100 --closed
//! rctau --demo
//! ```

use clap::Parser;
use rctau_core::{
    error::Result,
    units::{format_capacitance, format_emf, format_resistance, format_time_constant, parse_value},
    ChangeEvent, CircuitState,
};

/// RC circuit time constant calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source EMF in volts [0-100]
    #[arg(short, long, default_value_t = 10.0)]
    emf: f64,

    /// Resistance in ohms [1-10000], SI suffixes accepted (e.g. 4.7k)
    #[arg(short, long, default_value_t = 1000.0, value_parser = parse_quantity)]
    resistance: f64,

    /// Capacitance in microfarads [1-10000], SI suffixes accepted
    #[arg(short, long, default_value_t = 100.0, value_parser = parse_quantity)]
    capacitance: f64,

    /// Close the switch (completes the charging loop)
    #[arg(long)]
    closed: bool,

    /// Cycle through a set of showcase configurations
    #[arg(long)]
    demo: bool,
}

fn parse_quantity(text: &str) -> std::result::Result<f64, String> {
    parse_value(text).ok_or_else(|| format!("'{text}' is not a number"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.demo {
        return run_demo();
    }

    let mut state = CircuitState::with_values(args.emf, args.resistance, args.capacitance)?;
    state.set_switch(args.closed);

    print_summary(&state);
    Ok(())
}

fn print_summary(state: &CircuitState) {
    println!("RC Circuit");
    println!("  EMF:           {}", format_emf(state.emf()));
    println!("  Resistance:    {}", format_resistance(state.resistance()));
    println!("  Capacitance:   {}", format_capacitance(state.capacitance()));
    println!("  Switch:        {}", state.switch());
    println!("  Active loop:   {}", loop_description(state));
    println!();
    println!(
        "  Time constant (τ): {}",
        format_time_constant(state.time_constant())
    );
}

fn loop_description(state: &CircuitState) -> &'static str {
    if state.switch_closed() {
        "charging (EMF → R → C)"
    } else {
        "discharging (R ↔ C)"
    }
}

/// Showcase configurations: (name, emf, resistance, capacitance, closed).
const DEMO_STATES: [(&str, f64, f64, f64, bool); 4] = [
    ("Low voltage, low capacitance", 5.0, 500.0, 10.0, false),
    ("Medium voltage, medium capacitance", 10.0, 1000.0, 100.0, true),
    ("High voltage, high capacitance", 20.0, 5000.0, 1000.0, true),
    ("Maximum values, switch open", 50.0, 10_000.0, 5000.0, false),
];

fn run_demo() -> Result<()> {
    println!("RC Circuit Time Constant - Demo Mode");
    println!("{}", "=".repeat(50));

    let mut state = CircuitState::new();
    state.subscribe(|event| match event {
        ChangeEvent::Emf(v) => println!("  EMF set to {}", format_emf(*v)),
        ChangeEvent::Resistance(v) => println!("  resistance set to {}", format_resistance(*v)),
        ChangeEvent::Capacitance(v) => println!("  capacitance set to {}", format_capacitance(*v)),
        ChangeEvent::Switch(s) => println!("  switch {s}"),
    });

    for (i, (name, emf, resistance, capacitance, closed)) in DEMO_STATES.iter().enumerate() {
        println!();
        println!("State {}: {name}", i + 1);

        state.set_emf(*emf)?;
        state.set_resistance(*resistance)?;
        state.set_capacitance(*capacitance)?;
        state.set_switch(*closed);

        println!(
            "  => time constant (τ): {}",
            format_time_constant(state.time_constant())
        );
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("Demo complete.");
    Ok(())
}
