use healthiq_scoring::weighted::{round_to, weighted_average, WeightedScore};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_input_scores_zero() {
    let empty: Vec<WeightedScore> = Vec::new();
    assert_eq!(weighted_average(&empty), 0.0);
}

#[test]
fn all_zero_weights_score_zero() {
    let items = [(0.0, 90.0), (0.0, 40.0)];
    assert_eq!(weighted_average(items), 0.0);
}

#[test]
fn single_pair_returns_its_score_for_any_positive_weight() {
    for weight in [0.1, 0.3, 1.0, 25.0, 99.5, 1000.0] {
        let avg = weighted_average([WeightedScore::new(weight, 73.0)]);
        assert!(close(avg, 73.0), "weight {weight} gave {avg}");
    }
}

#[test]
fn indicator_example_averages_to_fifty() {
    let items = [(25.0, 100.0), (25.0, 0.0), (50.0, 50.0)];
    assert!(close(weighted_average(items), 50.0));
}

#[test]
fn criterion_example_averages_to_sixty_six() {
    let items = [(30.0, 80.0), (70.0, 60.0)];
    assert!(close(weighted_average(items), 66.0));
}

#[test]
fn weights_need_not_sum_to_one_hundred() {
    let fractional = [(0.3, 80.0), (0.7, 60.0)];
    let doubled = [(60.0, 80.0), (140.0, 60.0)];
    assert!(close(weighted_average(fractional), 66.0));
    assert!(close(weighted_average(doubled), 66.0));
}

#[test]
fn result_stays_within_input_bounds() {
    let sets: [&[(f64, f64)]; 4] = [
        &[(1.0, 0.0), (3.0, 100.0)],
        &[(0.2, 55.0), (0.2, 55.0), (0.6, 12.5)],
        &[(10.0, 100.0), (0.0, 0.0)],
        &[(5.0, 0.0), (5.0, 0.0)],
    ];
    for set in sets {
        let avg = weighted_average(set.iter().copied());
        assert!((0.0..=100.0).contains(&avg), "{set:?} gave {avg}");
    }
}

#[test]
fn negative_and_non_finite_entries_are_skipped() {
    let items = [
        (-10.0, 100.0),
        (f64::NAN, 100.0),
        (f64::INFINITY, 100.0),
        (10.0, f64::NAN),
        (10.0, 40.0),
    ];
    assert!(close(weighted_average(items), 40.0));
}

#[test]
fn round_to_one_decimal() {
    assert_eq!(round_to(66.66666, 1), 66.7);
    assert_eq!(round_to(12.25, 0), 12.0);
    assert_eq!(round_to(-3.14159, 2), -3.14);
}
