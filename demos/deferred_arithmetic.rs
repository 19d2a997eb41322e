//! Deferred Arithmetic
//!
//! This example demonstrates expressions that are built first and
//! evaluated later.
//!
//! Key concepts:
//! - Composition never evaluates
//! - Every eval re-reads captured state
//! - Post-processing with then()
//! - Division by zero surfaces at eval time
//!
//! Run with: cargo run --example deferred_arithmetic

use std::cell::Cell;
use tether::Deferred;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Deferred Arithmetic Example ===\n");

    let a = Deferred::new(|| 10);
    let b = Deferred::new(|| 20);

    let sum = &a + &b;
    let product = &a * &b;
    println!("10 + 20 = {:?}", sum.eval());
    println!("10 * 20 = {:?}", product.eval());

    let x = Cell::new(5);
    let x_eval = Deferred::new(|| x.get() * 2);
    x.set(10);
    println!("x * 2 after x = 10: {:?}", x_eval.eval());

    let chain = Deferred::new(|| 10 + 20).then(|result| result * 2);
    println!("(10 + 20) * 2 = {:?}", chain.eval());

    let divisor = Cell::new(0);
    let quotient = Deferred::new(|| 100) / Deferred::new(|| divisor.get());
    match quotient.eval() {
        Ok(value) => println!("100 / 0 = {value}"),
        Err(err) => println!("100 / 0 failed: {err}"),
    }
    divisor.set(4);
    println!("100 / 4 = {:?}", quotient.eval());

    println!("\n=== Example Complete ===");
}
