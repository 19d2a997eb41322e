//! Reactive Counter
//!
//! This example demonstrates an observable cell with a single listener.
//!
//! Run with: cargo run --example reactive_counter

use tether::ObservableCell;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Reactive Counter Example ===\n");

    let mut counter = ObservableCell::new(0);
    counter.bind(|old, new| println!("counter changed: {old} -> {new}"));

    for step in 1..=3 {
        let next = counter.checked_add(step)?;
        counter.set(next.into_inner())?;
    }

    // Rebinding replaces the first listener
    counter.bind(|_, new| println!("second listener sees {new}"));
    counter.set(100)?;

    let halved = counter.checked_div(2)?;
    println!("\nderived cell: {halved} (bound: {})", halved.is_bound());

    if let Err(err) = counter.checked_div(0) {
        println!("counter / 0 failed: {err}");
    }

    println!("final value: {counter}");
    println!("\n=== Example Complete ===");
    Ok(())
}
