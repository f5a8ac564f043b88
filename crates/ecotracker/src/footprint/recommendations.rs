use super::category::FieldKey;
use super::input::FootprintInput;
use serde::{Deserialize, Serialize};

/// Message returned when no rule fires.
pub const DEFAULT_RECOMMENDATION: &str =
    "Congratulations! Your habits are already very sustainable!";

/// Thresholds backing the recommendation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub car_km_per_week: f64,
    pub electricity_kwh_per_month: f64,
    pub meat_meals_per_week: f64,
    pub minimum_recycling_level: f64,
}

impl RecommendationThresholds {
    pub fn standard() -> Self {
        Self {
            car_km_per_week: 100.0,
            electricity_kwh_per_month: 300.0,
            meat_meals_per_week: 7.0,
            minimum_recycling_level: 3.0,
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Trigger {
    Above(f64),
    Below(f64),
}

impl Trigger {
    fn fires(self, value: f64) -> bool {
        match self {
            Trigger::Above(threshold) => value > threshold,
            Trigger::Below(threshold) => value < threshold,
        }
    }
}

#[derive(Debug, Clone)]
struct RecommendationRule {
    field: FieldKey,
    trigger: Trigger,
    message: &'static str,
}

/// Ordered rule list evaluated top to bottom against the values as supplied, before any
/// clamping. NaN reads as zero.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<RecommendationRule>,
}

impl RecommendationEngine {
    pub fn new(thresholds: &RecommendationThresholds) -> Self {
        Self {
            rules: vec![
                RecommendationRule {
                    field: FieldKey::CarKm,
                    trigger: Trigger::Above(thresholds.car_km_per_week),
                    message: "Consider using public transport or cycling more often.",
                },
                RecommendationRule {
                    field: FieldKey::Electricity,
                    trigger: Trigger::Above(thresholds.electricity_kwh_per_month),
                    message: "Try to reduce energy use by switching off appliances you are not using.",
                },
                RecommendationRule {
                    field: FieldKey::Meat,
                    trigger: Trigger::Above(thresholds.meat_meals_per_week),
                    message: "Cutting down on red meat can lower your footprint.",
                },
                RecommendationRule {
                    field: FieldKey::Recycling,
                    trigger: Trigger::Below(thresholds.minimum_recycling_level),
                    message: "Step up your recycling and composting efforts.",
                },
            ],
        }
    }

    pub fn standard() -> Self {
        Self::new(&RecommendationThresholds::standard())
    }

    /// Messages of every triggered rule in declaration order, or the default message alone.
    pub fn recommend(&self, input: &FootprintInput) -> Vec<String> {
        let mut recommendations: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| {
                let value = input.value(rule.field);
                rule.trigger.fires(if value.is_nan() { 0.0 } else { value })
            })
            .map(|rule| rule.message.to_string())
            .collect();

        if recommendations.is_empty() {
            recommendations.push(DEFAULT_RECOMMENDATION.to_string());
        }

        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Recommendations under the standard thresholds.
pub fn recommend(input: &FootprintInput) -> Vec<String> {
    RecommendationEngine::standard().recommend(input)
}
