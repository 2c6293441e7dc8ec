use std::sync::Arc;
use std::thread;

use serde_json::{json, Map, Value};

use fieldscope::params::{ParameterStore, SimulationParameters};

fn patch(value: Value) -> Map<String, Value> {
    value.as_object().expect("object literal").clone()
}

#[test]
fn partial_patch_keeps_untouched_fields() {
    let store = ParameterStore::default();
    let after = store.update(&patch(json!({ "radius": 10, "frequency": "4.2" })));
    match after {
        SimulationParameters::Waveguide {
            radius,
            frequency,
            epsilon_r,
            ..
        } => {
            assert_eq!(radius, 10.0);
            assert_eq!(frequency, 4.2);
            assert_eq!(epsilon_r, 1.0, "unmentioned field must survive");
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn garbage_values_never_corrupt_the_store() {
    let store = ParameterStore::default();
    let before = store.snapshot();
    store.update(&patch(json!({
        "radius": "not a number",
        "frequency": null,
        "epsilon_r": [1, 2],
        "mode": "TE11",
    })));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn model_switch_then_tune_round_trips() {
    let store = ParameterStore::default();
    store.update(&patch(json!({ "model": "diffusion2d" })));
    let tuned = store.update(&patch(json!({ "length": 3.0, "diffusion": 0.25 })));
    assert_eq!(
        tuned,
        SimulationParameters::Diffusion2d {
            length: 3.0,
            amplitude: 1.0,
            diffusion: 0.25,
        }
    );

    // Switching back lands on waveguide defaults, not stale values.
    let back = store.update(&patch(json!({ "model": "waveguide" })));
    assert_eq!(back, SimulationParameters::default_waveguide());
}

#[test]
fn diffusion_keys_do_not_leak_into_waveguide() {
    let store = ParameterStore::default();
    let after = store.update(&patch(json!({ "length": 5.0, "amplitude": 2.0 })));
    assert_eq!(after, SimulationParameters::default_waveguide());
}

#[test]
fn concurrent_writers_leave_a_consistent_store() {
    let store = Arc::new(ParameterStore::default());
    let mut handles = Vec::new();
    for worker in 0..4u32 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..500u32 {
                let v = f64::from(worker * 1_000 + i);
                store.update(&patch(json!({ "radius": v, "frequency": v })));
            }
        }));
    }
    for h in handles {
        h.join().expect("writer thread");
    }
    match store.snapshot() {
        SimulationParameters::Waveguide {
            radius, frequency, ..
        } => assert_eq!(radius, frequency, "last patch must land whole"),
        other => panic!("unexpected variant: {other:?}"),
    }
}
