//! JSON Graph
//!
//! Loads a graph and an engine config from JSON, attaches a guard, lints the
//! graph and drives it.
//!
//! Run with: RUST_LOG=kahtox=trace cargo run --example json_graph

use kahtox::engine::{ActionWrapper, Grapher, GrapherConfig};
use kahtox::{Guard, StateGraph};
use serde_json::{json, Value};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

const GRAPH: &str = r#"{
    "$initial": "cart",
    "states": {
        "cart": {
            "checkout": { "nextState": "paying", "action": "START_PAYMENT" },
            "broken": "not a transition"
        },
        "paying": {
            "paid": { "nextState": "done", "action": "SEND_RECEIPT" },
            "declined": { "nextState": "cart", "notifyView": true }
        }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== JSON Graph ===\n");

    let mut graph: StateGraph<Value> = StateGraph::try_from_json_str(GRAPH)?;
    graph.set_guard(
        "cart",
        "checkout",
        Guard::on_payload(|p: Option<&Value>| {
            p.and_then(|v| v.get("items"))
                .and_then(Value::as_u64)
                .is_some_and(|n| n > 0)
        }),
    )?;

    match graph.validate() {
        Validation::Success(_) => println!("Graph lint: clean"),
        Validation::Failure(issues) => {
            println!("Graph lint found {} issue(s):", issues.len());
            for issue in issues.iter() {
                println!("  - {issue}");
            }
        }
    }

    let config = GrapherConfig::from_json_str(r#"{ "action_policy": "always" }"#)?;
    let wrapper = ActionWrapper::<Value>::new(|action, env| {
        println!("  [action] {action} ({:?})", env.payload);
    });

    let mut shop = Grapher::with_config(graph, Some(wrapper), config);
    shop.after_transition(|state, payload, _| println!("  [view] {state} {payload:?}"));

    println!("\nAvailable from cart: {:?}", shop.available_events());
    shop.dispatch("checkout", Some(json!({ "items": 0 })));
    shop.dispatch("checkout", Some(json!({ "items": 2 })));
    shop.dispatch_event("declined");
    shop.dispatch("checkout", Some(json!({ "items": 1 })));
    shop.dispatch_event("paid");
    shop.dispatch_event("broken");

    println!("\nFinal state: {}", shop.current_state());
    println!("Path: {}", shop.history().get_path().join(" -> "));
    println!("\n=== Example Complete ===");
    Ok(())
}
