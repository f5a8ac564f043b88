use super::common::*;
use crate::footprint::{assess, compute, CategoryKey, FieldKey, FootprintInput};

#[test]
fn reference_input_produces_expected_breakdown() {
    let score = compute(&reference_input());

    assert_close(score.categories[&CategoryKey::Transport], 21.0);
    assert_close(score.categories[&CategoryKey::Energy], 150.0);
    assert_close(score.categories[&CategoryKey::Food], 18.0);
    assert_eq!(score.categories[&CategoryKey::Consumption], 0.0);
    assert_close(score.total_footprint, 179.0);
}

#[test]
fn total_floors_unclamped_sum_not_category_scores() {
    let score = compute(&reference_input());
    let clamped_sum: f64 = score.categories.values().sum();

    // Consumption is -10 raw: it reports as 0 but still offsets the total.
    assert_close(clamped_sum, 189.0);
    assert!(score.total_footprint < clamped_sum);
}

#[test]
fn total_is_floored_when_offsets_dominate() {
    let input = FootprintInput::new()
        .with(FieldKey::CarKm, 10.0)
        .with(FieldKey::Recycling, 5.0)
        .with(FieldKey::Vegetables, 10.0);

    let score = compute(&input);

    assert_close(score.categories[&CategoryKey::Transport], 2.1);
    assert_eq!(score.categories[&CategoryKey::Food], 0.0);
    assert_eq!(score.categories[&CategoryKey::Consumption], 0.0);
    assert_eq!(score.total_footprint, 0.0);
}

#[test]
fn empty_input_scores_every_category_at_zero() {
    let score = compute(&FootprintInput::new());

    assert_eq!(score.categories.len(), CategoryKey::ordered().len());
    for category in CategoryKey::ordered() {
        assert_eq!(score.categories[&category], 0.0);
    }
    assert_eq!(score.total_footprint, 0.0);
}

#[test]
fn explicit_zero_input_matches_empty_input() {
    let mut zeros = FootprintInput::new();
    for category in CategoryKey::ordered() {
        for spec in category.fields() {
            zeros.set(spec.key, 0.0);
        }
    }

    assert_eq!(compute(&zeros), compute(&FootprintInput::new()));
}

#[test]
fn out_of_range_values_are_clamped() {
    let input = FootprintInput::new()
        .with(FieldKey::Flights, 25.0)
        .with(FieldKey::Meat, -4.0)
        .with(FieldKey::Gas, f64::NAN);

    let score = compute(&input);

    assert_close(score.categories[&CategoryKey::Transport], 5000.0);
    assert_eq!(score.categories[&CategoryKey::Food], 0.0);
    assert_eq!(score.categories[&CategoryKey::Energy], 0.0);
    assert_close(score.total_footprint, 5000.0);
}

#[test]
fn compute_is_deterministic() {
    let input = heavy_input();
    assert_eq!(compute(&input), compute(&input));
}

#[test]
fn scores_are_never_negative_at_the_bounds() {
    let mut maxed = FootprintInput::new();
    let mut offsets_only = FootprintInput::new();
    for category in CategoryKey::ordered() {
        for spec in category.fields() {
            maxed.set(spec.key, spec.max);
            if spec.factor < 0.0 {
                offsets_only.set(spec.key, spec.max);
            }
        }
    }

    for input in [maxed, offsets_only] {
        let score = compute(&input);
        assert!(score.total_footprint >= 0.0);
        assert!(score.categories.values().all(|value| *value >= 0.0));
    }
}

#[test]
fn assess_combines_score_and_recommendations() {
    let result = assess(&reference_input());

    assert_close(result.total_footprint, 179.0);
    assert_eq!(result.categories.len(), 4);
    assert_eq!(result.recommendations.len(), 1);
}
