// Property-based tests for the comparison laws.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::{BTreeMap, HashMap};

use fuzzy_eq_core::{fuzzy_eq, fuzzy_eq_within, Comparator, RecordingObserver};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_float() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6_f64
}

fn arb_tolerance() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        3 => 0.0..10.0_f64,
    ]
}

fn arb_doubles() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_float(), 0..16)
}

fn arb_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..16)
}

fn arb_map() -> impl Strategy<Value = BTreeMap<i16, f64>> {
    prop::collection::btree_map(any::<i16>(), arb_float(), 0..8)
}

/// Few, closely spaced keys so that a wide tolerance makes them collide.
fn arb_crowded_entries() -> impl Strategy<Value = BTreeMap<i16, f64>> {
    prop::collection::btree_map(-6..6_i16, (-2..2_i8).prop_map(f64::from), 0..6)
}

fn arb_wide_tolerance() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        1 => Just(1.0),
        2 => 0.0..3.0_f64,
    ]
}

fn hashed(entries: &BTreeMap<i16, f64>) -> HashMap<i16, f64> {
    entries.iter().map(|(key, value)| (*key, *value)).collect()
}

fn arb_triple() -> impl Strategy<Value = (i32, f64, Vec<f32>)> {
    (
        -1000..1000_i32,
        arb_float(),
        prop::collection::vec(-100.0..100.0_f32, 0..4),
    )
}

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn sequences_equal_themselves(values in arb_doubles(), tolerance in arb_tolerance()) {
        prop_assert!(fuzzy_eq_within(&values, &values, tolerance));
    }

    #[test]
    fn maps_equal_themselves(map in arb_map(), tolerance in arb_tolerance()) {
        prop_assert!(fuzzy_eq_within(&map, &map, tolerance));
    }

    #[test]
    fn tuples_equal_themselves(triple in arb_triple(), tolerance in arb_tolerance()) {
        prop_assert!(fuzzy_eq_within(&triple, &triple, tolerance));
    }
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn scalars_are_symmetric(a in arb_float(), b in -1000..1000_i32, tolerance in arb_tolerance()) {
        prop_assert_eq!(fuzzy_eq_within(&a, &b, tolerance), fuzzy_eq_within(&b, &a, tolerance));
    }

    #[test]
    fn mixed_sequences_are_symmetric(
        left in arb_doubles(),
        right in arb_ints(),
        tolerance in arb_tolerance(),
    ) {
        prop_assert_eq!(
            fuzzy_eq_within(&left, &right, tolerance),
            fuzzy_eq_within(&right, &left, tolerance)
        );
    }

    #[test]
    fn maps_are_symmetric(left in arb_map(), right in arb_map(), tolerance in arb_tolerance()) {
        prop_assert_eq!(
            fuzzy_eq_within(&left, &right, tolerance),
            fuzzy_eq_within(&right, &left, tolerance)
        );
    }
}

// ---------------------------------------------------------------------------
// Tolerance monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn widening_tolerance_keeps_matches(
        left in arb_doubles(),
        shift in -1.0..1.0_f64,
        tolerance in arb_tolerance(),
        extra in 0.0..5.0_f64,
    ) {
        let right: Vec<f64> = left.iter().map(|v| v + shift).collect();
        if fuzzy_eq_within(&left, &right, tolerance) {
            prop_assert!(fuzzy_eq_within(&left, &right, tolerance + extra));
        }
    }

    #[test]
    fn scalar_matches_iff_within_tolerance(
        a in arb_float(),
        b in arb_float(),
        tolerance in arb_tolerance(),
    ) {
        prop_assert_eq!(fuzzy_eq_within(&a, &b, tolerance), (a - b).abs() <= tolerance);
    }
}

// ---------------------------------------------------------------------------
// Structural short-circuits and fallbacks
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn size_mismatch_never_matches(
        left in arb_doubles(),
        extra in arb_float(),
    ) {
        let mut right = left.clone();
        right.push(extra);
        let engine = Comparator::default().with_observer(RecordingObserver::default());
        prop_assert!(!engine.compare(&left, &right));
        // Only the sequence itself is reported; no element was compared.
        prop_assert_eq!(engine.observer().events().len(), 1);
        prop_assert!(!fuzzy_eq_within(&left, &right, f64::MAX));
    }

    #[test]
    fn sequence_never_matches_scalar(values in arb_doubles(), scalar in arb_float()) {
        prop_assert!(!fuzzy_eq_within(&values, &scalar, f64::MAX));
        prop_assert!(!fuzzy_eq_within(&scalar, &values, f64::MAX));
    }

    #[test]
    fn tuple_positions_are_all_evaluated(a in -10..10_i32, b in -10..10_i32, c in -10..10_i32) {
        let engine = Comparator::default().with_observer(RecordingObserver::default());
        let expected = a == 0 && b == 0 && c == 0;
        prop_assert_eq!(engine.compare(&(a, b, c), &(0, 0, 0)), expected);
        let positions = engine
            .observer()
            .events()
            .iter()
            .filter(|event| event.depth == 1)
            .count();
        prop_assert_eq!(positions, 3);
    }
}

// ---------------------------------------------------------------------------
// Unordered maps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn hash_maps_equal_themselves(
        entries in arb_crowded_entries(),
        tolerance in arb_wide_tolerance(),
    ) {
        prop_assert!(fuzzy_eq_within(&hashed(&entries), &hashed(&entries), tolerance));
    }

    #[test]
    fn hash_maps_are_symmetric(
        left in arb_crowded_entries(),
        right in arb_crowded_entries(),
        tolerance in arb_wide_tolerance(),
    ) {
        let (left, right) = (hashed(&left), hashed(&right));
        prop_assert_eq!(
            fuzzy_eq_within(&left, &right, tolerance),
            fuzzy_eq_within(&right, &left, tolerance)
        );
    }

    #[test]
    fn hash_map_verdict_survives_rebuilding(
        left in arb_crowded_entries(),
        right in arb_crowded_entries(),
        tolerance in arb_wide_tolerance(),
    ) {
        // Every HashMap gets its own hasher seed, so each rebuild iterates in a
        // fresh order.
        let expected = fuzzy_eq_within(&hashed(&left), &hashed(&right), tolerance);
        for _ in 0..8 {
            let verdict = fuzzy_eq_within(&hashed(&left), &hashed(&right), tolerance);
            prop_assert_eq!(verdict, expected);
        }
    }

    #[test]
    fn hash_maps_agree_with_sorted_maps_at_zero_tolerance(
        left in arb_crowded_entries(),
        right in arb_crowded_entries(),
    ) {
        prop_assert_eq!(
            fuzzy_eq_within(&hashed(&left), &hashed(&right), 0.0),
            fuzzy_eq_within(&left, &right, 0.0)
        );
    }
}

#[test]
fn hash_maps_with_overlapping_keys_match_regardless_of_order() {
    for _ in 0..200 {
        let left: HashMap<i32, i32> = HashMap::from([(1, 0), (2, 0)]);
        let right: HashMap<i32, i32> = HashMap::from([(2, 0), (3, 0)]);
        assert!(fuzzy_eq_within(&left, &right, 1.0));
        assert!(fuzzy_eq_within(&right, &left, 1.0));
    }
}

#[test]
fn default_tolerance_matches_single_precision_noise() {
    let noisy: Vec<f32> = (0..100).map(|i| i as f32 * 0.1).collect();
    let exact: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
    assert!(fuzzy_eq(&noisy, &exact));
}
