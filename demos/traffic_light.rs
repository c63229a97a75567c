//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic graph.
//!
//! Key concepts:
//! - Cyclic transitions (states repeat)
//! - Observers only hear about states other than the initial one
//! - `notify_view` forces a notification when returning to the initial state
//!
//! Run with: cargo run --example traffic_light

use kahtox::builder::{simple_transition, GraphBuilder, TransitionBuilder};
use kahtox::make_grapher;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let graph = GraphBuilder::<()>::new()
        .initial("red")
        .add_transition("red", "tick", simple_transition("green"))
        .add_transition("green", "tick", simple_transition("yellow"))
        .transition(
            "yellow",
            "tick",
            TransitionBuilder::new().to("red").notify_view(true),
        )?
        .build()?;

    let mut light = make_grapher(graph, None);
    light.after_transition(|state, _, _| println!("  light is now {state}"));

    println!("Initial state: {}\n", light.current_state());
    println!("Transition sequence:");
    for _ in 0..6 {
        light.dispatch_event("tick");
    }

    println!("\nPath: {}", light.history().get_path().join(" -> "));
    println!("\n=== Example Complete ===");
    Ok(())
}
