//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify dispatch invariants hold across
//! many randomly generated event sequences.

use kahtox::builder::{GraphBuilder, TransitionBuilder};
use kahtox::engine::{ActionWrapper, DispatchOutcome, Grapher, NullSink};
use kahtox::graph::StateGraph;
use kahtox::{make_grapher, Guard};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const EVENTS: [&str; 6] = ["go", "stop", "pause", "resume", "poke", "unknown"];

/// `poke` is declared everywhere with an action but only passes its guard
/// for even payloads.
fn graph() -> StateGraph<u64> {
    let poke = || {
        TransitionBuilder::new()
            .to("poked")
            .action("POKE")
            .guard(Guard::on_payload(|n: Option<&u64>| n.is_some_and(|n| n % 2 == 0)))
    };

    GraphBuilder::new()
        .initial("idle")
        .transition("idle", "go", TransitionBuilder::new().to("running"))
        .unwrap()
        .transition("idle", "poke", poke())
        .unwrap()
        .transition("running", "pause", TransitionBuilder::new().to("paused"))
        .unwrap()
        .transition("running", "stop", TransitionBuilder::new().to("idle"))
        .unwrap()
        .transition("running", "poke", poke())
        .unwrap()
        .transition("paused", "resume", TransitionBuilder::new().to("running"))
        .unwrap()
        .transition("paused", "stop", TransitionBuilder::new().to("idle"))
        .unwrap()
        .transition("poked", "stop", TransitionBuilder::new().to("idle"))
        .unwrap()
        .build()
        .unwrap()
}

fn engine(actions: Arc<AtomicUsize>) -> Grapher<u64> {
    let wrapper = ActionWrapper::new(move |_, _| {
        actions.fetch_add(1, Ordering::SeqCst);
    });
    make_grapher(graph(), Some(wrapper)).with_sink(NullSink)
}

prop_compose! {
    fn arbitrary_dispatch()(event in 0..EVENTS.len(), payload in proptest::option::of(0..100u64))
        -> (&'static str, Option<u64>) {
        (EVENTS[event], payload)
    }
}

proptest! {
    #[test]
    fn state_only_changes_on_transitioned_outcome(
        steps in proptest::collection::vec(arbitrary_dispatch(), 0..40)
    ) {
        let mut grapher = engine(Arc::new(AtomicUsize::new(0)));

        for (event, payload) in steps {
            let before = grapher.current_state().to_string();
            let prev_before = grapher.prev_state().map(str::to_string);

            match grapher.dispatch(event, payload) {
                DispatchOutcome::Transitioned { from, to } => {
                    prop_assert_eq!(&from, &before);
                    prop_assert_eq!(grapher.current_state(), to.as_str());
                    prop_assert_eq!(grapher.prev_state(), Some(before.as_str()));
                }
                DispatchOutcome::GuardRejected | DispatchOutcome::Rejected => {
                    prop_assert_eq!(grapher.current_state(), before.as_str());
                    prop_assert_eq!(grapher.prev_state().map(str::to_string), prev_before);
                }
            }
        }
    }

    #[test]
    fn actions_fire_once_per_poke_regardless_of_guard(
        steps in proptest::collection::vec(arbitrary_dispatch(), 0..40)
    ) {
        let actions = Arc::new(AtomicUsize::new(0));
        let mut grapher = engine(Arc::clone(&actions));
        let mut expected = 0;

        for (event, payload) in steps {
            let declared = grapher.can_dispatch(event);
            grapher.dispatch(event, payload);
            if event == "poke" && declared {
                expected += 1;
            }
        }

        prop_assert_eq!(actions.load(Ordering::SeqCst), expected);
    }

    #[test]
    fn rejected_guard_is_idempotent(payloads in proptest::collection::vec(0..50u64, 1..20)) {
        let actions = Arc::new(AtomicUsize::new(0));
        let mut grapher = engine(Arc::clone(&actions));

        for n in &payloads {
            grapher.dispatch("poke", Some(n * 2 + 1));
        }

        prop_assert_eq!(grapher.current_state(), "idle");
        prop_assert_eq!(grapher.prev_state(), None);
        prop_assert_eq!(actions.load(Ordering::SeqCst), payloads.len());
    }

    #[test]
    fn history_matches_transition_count(
        steps in proptest::collection::vec(arbitrary_dispatch(), 0..40)
    ) {
        let mut grapher = engine(Arc::new(AtomicUsize::new(0)));
        let mut transitions = 0;

        for (event, payload) in steps {
            if grapher.dispatch(event, payload).is_transitioned() {
                transitions += 1;
            }
        }

        let history = grapher.history();
        prop_assert_eq!(history.len(), transitions);
        if let Some(last) = history.last() {
            prop_assert_eq!(last.to.as_str(), grapher.current_state());
            prop_assert_eq!(Some(last.from.as_str()), grapher.prev_state());
        }
    }
}
