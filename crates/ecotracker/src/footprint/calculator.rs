use super::category::CategoryKey;
use super::input::FootprintInput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Category breakdown and total for one input, in kg CO2e.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintScore {
    pub total_footprint: f64,
    pub categories: BTreeMap<CategoryKey, f64>,
}

/// Score every category of the model against `input`.
///
/// Each category is floored at zero on its own, while the total is floored once over the
/// unfloored category sums. A negative category (heavy recycling, say) therefore still
/// offsets the other categories in the total even though it reports as zero.
pub fn compute(input: &FootprintInput) -> FootprintScore {
    let mut categories = BTreeMap::new();
    let mut raw_total = 0.0;

    for category in CategoryKey::ordered() {
        let raw = raw_category_total(category, input);
        categories.insert(category, raw.max(0.0));
        raw_total += raw;
    }

    FootprintScore {
        total_footprint: raw_total.max(0.0),
        categories,
    }
}

/// Signed sum of `value * factor` across the category's fields.
pub(crate) fn raw_category_total(category: CategoryKey, input: &FootprintInput) -> f64 {
    category
        .fields()
        .iter()
        .map(|spec| {
            let supplied = input.value(spec.key);
            if !spec.contains(supplied) {
                debug!(
                    category = %category,
                    field = %spec.key,
                    value = supplied,
                    max = spec.max,
                    "clamping out-of-range footprint input"
                );
            }
            spec.contribution(supplied)
        })
        .sum()
}
