//! End-to-end tests for the archetype engine.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use geolca_core::{EngineError, Parameters, TableKind};
use geolca_store::{CoefficientStore, StoreConfig};
use geolca_test::{single_term, ModelFixture};

use crate::ArchetypeEngine;

/// One category, four terms, mirroring the published conventional-plant
/// model `(d·b0 + b1)/c + d·b2 + b3` as pure table data.
fn conventional_like() -> ModelFixture {
    ModelFixture::neutral("conv_plant", &["climate change"], 4)
        .cell(TableKind::Alpha, 0, 0, 1.0e-4)
        .cell(TableKind::X, 0, 0, "average_depth_of_wells")
        .cell(TableKind::U, 0, 0, "producers_capacity")
        .cell(TableKind::Alpha, 0, 1, 2.0)
        .cell(TableKind::U, 0, 1, "producers_capacity")
        .cell(TableKind::Alpha, 0, 2, 3.0e-3)
        .cell(TableKind::X, 0, 2, "average_depth_of_wells")
        .cell(TableKind::Alpha, 0, 3, 0.5)
        .range("average_depth_of_wells", 660.0, 4000.0, "Average depth of wells")
        .range("producers_capacity", 0.0, 20.0, "Producers' capacity")
}

#[test]
fn single_term_worked_example() {
    let engine = ArchetypeEngine::preloaded([single_term("demo_plant").data()]);
    let result = engine.evaluate("demo_plant", &Parameters::new()).unwrap();
    assert_eq!(result.get("climate change"), Some(24.0));
}

#[test]
fn reproduces_a_threshold_model_from_table_data() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let parameters = Parameters::new()
        .with("average_depth_of_wells", 2250.0)
        .with("producers_capacity", 5.9);

    let result = engine.evaluate("conv_plant", &parameters).unwrap();
    let expected = (2250.0 * 1.0e-4 + 2.0) / 5.9 + 2250.0 * 3.0e-3 + 0.5;
    let value = result.get("climate change").unwrap();
    assert!((value - expected).abs() < 1e-12, "got {value}, expected {expected}");
}

#[test]
fn reproduces_depth_scaling_of_the_heat_model() {
    // One drilling term of the egs-heat model: α·L^β·10^(γ·L).
    let fixture = ModelFixture::neutral("heat_plant", &["climate change"], 1)
        .cell(TableKind::Alpha, 0, 0, 4.2e-2)
        .cell(TableKind::Z, 0, 0, "length_well")
        .cell(TableKind::Beta, 0, 0, 0.7)
        .cell(TableKind::Gamma, 0, 0, 3.0e-5)
        .cell(TableKind::W, 0, 0, "length_well")
        .range("length_well", 1300.0, 5500.0, "Length_well");
    let engine = ArchetypeEngine::preloaded([fixture.data()]);

    let result = engine
        .evaluate("heat_plant", &Parameters::new().with("length_well", 4250.0))
        .unwrap();
    let expected = 4.2e-2 * 4250.0f64.powf(0.7) * 10f64.powf(3.0e-5 * 4250.0);
    let value = result.get("climate change").unwrap();
    assert!((value - expected).abs() < 1e-9, "got {value}, expected {expected}");
}

#[test]
fn results_are_bit_identical_across_calls() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let parameters = Parameters::new()
        .with("average_depth_of_wells", 3123.456)
        .with("producers_capacity", 7.77);

    let first = engine.evaluate("conv_plant", &parameters).unwrap();
    let second = engine.evaluate("conv_plant", &parameters).unwrap();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
}

#[test]
fn boundary_values_are_accepted() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    for depth in [660.0, 4000.0] {
        let parameters = Parameters::new()
            .with("average_depth_of_wells", depth)
            .with("producers_capacity", 5.9);
        assert!(engine.evaluate("conv_plant", &parameters).is_ok());
    }
}

#[test]
fn out_of_range_parameter_aborts_the_call() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let parameters = Parameters::new()
        .with("average_depth_of_wells", 500.0)
        .with("producers_capacity", 5.9);

    assert_eq!(
        engine.evaluate("conv_plant", &parameters).unwrap_err(),
        EngineError::OutOfRangeParameter {
            name: "average_depth_of_wells".into(),
            value: 500.0,
            min: 660.0,
            max: 4000.0,
            label: "Average depth of wells".into(),
        }
    );
}

#[test]
fn unconstrained_parameters_pass_through() {
    // `operational_CH4_emissions` has no registered range here, so any value
    // is accepted; it is also unreferenced, so it does not change results.
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let parameters = Parameters::new()
        .with("average_depth_of_wells", 2250.0)
        .with("producers_capacity", 5.9)
        .with("operational_CH4_emissions", 1.0e12);
    assert!(engine.evaluate("conv_plant", &parameters).is_ok());
}

#[test]
fn missing_reference_names_the_parameter() {
    let fixture = single_term("demo_plant").cell(TableKind::X, 0, 0, "foo");
    let engine = ArchetypeEngine::preloaded([fixture.data()]);

    assert_eq!(
        engine.evaluate("demo_plant", &Parameters::new()).unwrap_err(),
        EngineError::UnknownParameterReference("foo".into())
    );
}

#[test]
fn zero_divisor_propagates_to_the_result() {
    let fixture = single_term("demo_plant").cell(TableKind::U, 0, 0, "producers_capacity");
    let engine = ArchetypeEngine::preloaded([fixture.data()]);

    let result = engine
        .evaluate("demo_plant", &Parameters::new().with("producers_capacity", 0.0))
        .unwrap();
    assert_eq!(result.get("climate change"), Some(f64::INFINITY));
}

#[test]
fn categories_keep_table_row_order() {
    let fixture = ModelFixture::neutral(
        "ordered_plant",
        &["ozone depletion", "climate change", "acidification"],
        1,
    );
    let engine = ArchetypeEngine::preloaded([fixture.data()]);

    let result = engine.evaluate("ordered_plant", &Parameters::new()).unwrap();
    let labels: Vec<&str> = result.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(labels, ["ozone depletion", "climate change", "acidification"]);
}

#[test]
fn unknown_archetype_is_missing_data() {
    let engine = ArchetypeEngine::preloaded([]);
    assert_eq!(
        engine.evaluate("egs_heat", &Parameters::new()).unwrap_err(),
        EngineError::MissingCoefficientData("egs_heat".into())
    );
}

#[test]
fn store_backed_engine_loads_once() {
    let dir = TempDir::new().unwrap();
    let fixture = single_term("demo_plant");
    fixture.write_dir(dir.path()).unwrap();

    let store = CoefficientStore::new(
        StoreConfig::new(dir.path()).with_archetype(fixture.archetype()),
    );
    let engine = ArchetypeEngine::new(store);

    let first = engine.evaluate("demo_plant", &Parameters::new()).unwrap();
    assert_eq!(first.get("climate change"), Some(24.0));

    // Tables are cached per archetype: evaluation survives the backing
    // files disappearing after the first load.
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        std::fs::remove_file(entry.unwrap().path()).unwrap();
    }
    let second = engine.evaluate("demo_plant", &Parameters::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn batch_evaluation_keeps_input_order() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let sets: Vec<Parameters> = [1000.0, 2000.0, 3000.0]
        .iter()
        .map(|depth| {
            Parameters::new()
                .with("average_depth_of_wells", *depth)
                .with("producers_capacity", 5.9)
        })
        .collect();

    let results = engine.evaluate_many("conv_plant", &sets).unwrap();
    assert_eq!(results.len(), 3);
    let values: Vec<f64> = results
        .iter()
        .map(|r| r.get("climate change").unwrap())
        .collect();
    assert!(values[0] < values[1] && values[1] < values[2]);

    for (set, result) in sets.iter().zip(&results) {
        assert_eq!(engine.evaluate("conv_plant", set).unwrap(), *result);
    }
}

#[test]
fn batch_fails_on_first_invalid_set() {
    let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
    let sets = vec![
        Parameters::new()
            .with("average_depth_of_wells", 2250.0)
            .with("producers_capacity", 5.9),
        Parameters::new()
            .with("average_depth_of_wells", 2250.0)
            .with("producers_capacity", 50.0),
    ];

    assert!(matches!(
        engine.evaluate_many("conv_plant", &sets).unwrap_err(),
        EngineError::OutOfRangeParameter { .. }
    ));
}

#[test]
fn shared_engine_is_consistent_across_threads() {
    let engine = Arc::new(ArchetypeEngine::preloaded([conventional_like().data()]));
    let parameters = Parameters::new()
        .with("average_depth_of_wells", 2250.0)
        .with("producers_capacity", 5.9);
    let expected = engine.evaluate("conv_plant", &parameters).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let parameters = parameters.clone();
            std::thread::spawn(move || engine.evaluate("conv_plant", &parameters).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    /// Any in-range parameter pair evaluates, and evaluates the same twice.
    #[test]
    fn evaluation_is_deterministic(
        depth in 660.0f64..=4000.0,
        capacity in 0.1f64..=20.0,
    ) {
        let engine = ArchetypeEngine::preloaded([conventional_like().data()]);
        let parameters = Parameters::new()
            .with("average_depth_of_wells", depth)
            .with("producers_capacity", capacity);

        let first = engine.evaluate("conv_plant", &parameters).unwrap();
        let second = engine.evaluate("conv_plant", &parameters).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A parameter with no registered range never causes a range failure.
    #[test]
    fn unregistered_parameters_are_unconstrained(value in proptest::num::f64::NORMAL) {
        let engine = ArchetypeEngine::preloaded([single_term("demo_plant").data()]);
        let parameters = Parameters::new().with("massflux", value);
        prop_assert!(engine.evaluate("demo_plant", &parameters).is_ok());
    }
}
