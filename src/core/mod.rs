//! Core value types shared by the graph and the engine.
//!
//! - `Payload`: what a dispatch carries, and whether it is error-like
//! - `Guard`: predicates gating a transition's state change
//! - `StateHistory`: immutable record of applied transitions

mod guard;
mod history;
mod payload;

pub use guard::{Guard, GuardEnvelope};
pub use history::{StateHistory, StateTransition};
pub use payload::Payload;
