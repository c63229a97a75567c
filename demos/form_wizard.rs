//! Form Wizard
//!
//! A multi-step form where the "submit" step is guarded by payload
//! validation and every submit attempt is reported to the action layer,
//! whether it was accepted or not.
//!
//! Key concepts:
//! - Guards over the payload
//! - Actions fire even when the guard rejects the state change
//! - Error-like payloads reach observers through the `is_error` flag
//!
//! Run with: RUST_LOG=kahtox=debug cargo run --example form_wizard

use kahtox::builder::{GraphBuilder, TransitionBuilder};
use kahtox::engine::ActionWrapper;
use kahtox::{make_grapher, Payload};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
enum FormEvent {
    Fields { email: String },
    Failure(String),
}

impl Payload for FormEvent {
    fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

fn has_valid_email(event: Option<&FormEvent>) -> bool {
    matches!(event, Some(FormEvent::Fields { email }) if email.contains('@'))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Form Wizard ===\n");

    let graph = GraphBuilder::<FormEvent>::new()
        .initial("editing")
        .transition(
            "editing",
            "submit",
            TransitionBuilder::<FormEvent>::new()
                .to("submitted")
                .action("SUBMIT_ATTEMPT")
                .when(|env| has_valid_email(env.payload)),
        )?
        .transition(
            "submitted",
            "server_error",
            TransitionBuilder::new().to("editing").notify_view(true),
        )?
        .build()?;

    let wrapper = ActionWrapper::<FormEvent>::new(|action, env| {
        println!(
            "  [action] {action} -> state '{}' with {:?}",
            env.grapher.current_state(),
            env.payload
        );
    });

    let mut form = make_grapher(graph, Some(wrapper));
    form.after_transition(|state, payload, is_error| {
        println!("  [view] now '{state}', payload {payload:?}, error: {is_error}");
    });

    println!("Submitting without an email domain:");
    form.dispatch(
        "submit",
        Some(FormEvent::Fields {
            email: "nobody".into(),
        }),
    );

    println!("\nSubmitting a valid email:");
    form.dispatch(
        "submit",
        Some(FormEvent::Fields {
            email: "someone@example.com".into(),
        }),
    );

    println!("\nServer rejects the submission:");
    form.dispatch("server_error", Some(FormEvent::Failure("503".into())));

    println!("\nDispatching an undeclared event (logged, ignored):");
    form.dispatch_event("teleport");
    println!("  still in '{}'", form.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
