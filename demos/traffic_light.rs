//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic labeled state machine.
//!
//! Key concepts:
//! - Entry actions run on every entry, including the first
//! - Transition actions keyed by (from, to)
//! - Unregistered transitions are allowed and skip the action
//! - No final state (cycles indefinitely)
//!
//! Run with: RUST_LOG=tether=debug cargo run --example traffic_light

use tether::{LabeledState, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let red = LabeledState::new("Red", || println!("  [Red] Stop"));
    let green = LabeledState::new("Green", || println!("  [Green] Go!"));
    let yellow = LabeledState::new("Yellow", || println!("  [Yellow] Caution"));

    let mut machine = StateMachineBuilder::new()
        .initial(red.clone())
        .transition(&red, &green, || println!("  red -> green: release pedestrians"))
        .transition(&green, &yellow, || println!("  green -> yellow: start timer"))
        .transition(&yellow, &red, || println!("  yellow -> red: lock crossing"))
        .history_capacity(32)
        .build()?;

    for _ in 0..2 {
        machine
            .transition_to(&green)?
            .transition_to(&yellow)?
            .transition_to(&red)?;
    }

    println!("\nEmergency: red -> yellow has no action registered");
    machine.transition_to(&yellow)?;

    println!("\nPath: {}", machine.history().path().join(" -> "));
    println!("Current state: {}", machine.current());

    println!("\n=== Example Complete ===");
    Ok(())
}
