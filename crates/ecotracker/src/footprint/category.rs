use super::error::FootprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of footprint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Transport,
    Energy,
    Food,
    Consumption,
}

impl CategoryKey {
    pub const fn ordered() -> [Self; 4] {
        [Self::Transport, Self::Energy, Self::Food, Self::Consumption]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Energy => "energy",
            Self::Food => "food",
            Self::Consumption => "consumption",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Energy => "Energy",
            Self::Food => "Food",
            Self::Consumption => "Consumption",
        }
    }

    /// Field definitions for this category, in display order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Transport => &TRANSPORT_FIELDS,
            Self::Energy => &ENERGY_FIELDS,
            Self::Food => &FOOD_FIELDS,
            Self::Consumption => &CONSUMPTION_FIELDS,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = FootprintError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|category| category.as_str() == raw)
            .ok_or_else(|| FootprintError::UnknownCategory(raw.to_string()))
    }
}

/// Every measurable input across all categories. Each field belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    CarKm,
    PublicTransport,
    Flights,
    Electricity,
    Gas,
    Heating,
    Meat,
    Dairy,
    Vegetables,
    Shopping,
    Waste,
    Recycling,
}

impl FieldKey {
    pub const fn category(self) -> CategoryKey {
        match self {
            Self::CarKm | Self::PublicTransport | Self::Flights => CategoryKey::Transport,
            Self::Electricity | Self::Gas | Self::Heating => CategoryKey::Energy,
            Self::Meat | Self::Dairy | Self::Vegetables => CategoryKey::Food,
            Self::Shopping | Self::Waste | Self::Recycling => CategoryKey::Consumption,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarKm => "carKm",
            Self::PublicTransport => "publicTransport",
            Self::Flights => "flights",
            Self::Electricity => "electricity",
            Self::Gas => "gas",
            Self::Heating => "heating",
            Self::Meat => "meat",
            Self::Dairy => "dairy",
            Self::Vegetables => "vegetables",
            Self::Shopping => "shopping",
            Self::Waste => "waste",
            Self::Recycling => "recycling",
        }
    }

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            Self::CarKm => &TRANSPORT_FIELDS[0],
            Self::PublicTransport => &TRANSPORT_FIELDS[1],
            Self::Flights => &TRANSPORT_FIELDS[2],
            Self::Electricity => &ENERGY_FIELDS[0],
            Self::Gas => &ENERGY_FIELDS[1],
            Self::Heating => &ENERGY_FIELDS[2],
            Self::Meat => &FOOD_FIELDS[0],
            Self::Dairy => &FOOD_FIELDS[1],
            Self::Vegetables => &FOOD_FIELDS[2],
            Self::Shopping => &CONSUMPTION_FIELDS[0],
            Self::Waste => &CONSUMPTION_FIELDS[1],
            Self::Recycling => &CONSUMPTION_FIELDS[2],
        }
    }

    /// Resolve a field name within `category`. Names belonging to another category are rejected.
    pub fn parse(category: CategoryKey, raw: &str) -> Result<Self, FootprintError> {
        category
            .fields()
            .iter()
            .map(|spec| spec.key)
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| FootprintError::UnknownField {
                category,
                field: raw.to_string(),
            })
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds, unit and emission factor (kg CO2e per unit) of one input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub max: f64,
    pub unit: &'static str,
    pub factor: f64,
}

impl FieldSpec {
    pub const MIN: f64 = 0.0;

    pub fn contains(&self, value: f64) -> bool {
        (Self::MIN..=self.max).contains(&value)
    }

    /// Pull `value` into `[0, max]`. NaN is treated as the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return Self::MIN;
        }
        value.clamp(Self::MIN, self.max)
    }

    /// Signed kg CO2e contributed by `value` once bounded.
    pub fn contribution(&self, value: f64) -> f64 {
        self.clamp(value) * self.factor
    }
}

/// Look up a field definition by category and field name.
pub fn field_spec(category: CategoryKey, field: &str) -> Result<&'static FieldSpec, FootprintError> {
    FieldKey::parse(category, field).map(FieldKey::spec)
}

/// Emission factor for a category/field pair.
pub fn factor(category: CategoryKey, field: &str) -> Result<f64, FootprintError> {
    field_spec(category, field).map(|spec| spec.factor)
}

static TRANSPORT_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: FieldKey::CarKm,
        label: "Car distance per week",
        max: 500.0,
        unit: "km",
        factor: 0.21,
    },
    FieldSpec {
        key: FieldKey::PublicTransport,
        label: "Public transport trips per week",
        max: 20.0,
        unit: "trips",
        factor: 0.05,
    },
    FieldSpec {
        key: FieldKey::Flights,
        label: "Flights per year",
        max: 10.0,
        unit: "flights",
        factor: 500.0,
    },
];

static ENERGY_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: FieldKey::Electricity,
        label: "Monthly electricity use",
        max: 500.0,
        unit: "kWh",
        factor: 0.5,
    },
    FieldSpec {
        key: FieldKey::Gas,
        label: "Monthly gas use",
        max: 200.0,
        unit: "m³",
        factor: 2.0,
    },
    FieldSpec {
        key: FieldKey::Heating,
        label: "Monthly heating",
        max: 100.0,
        unit: "units",
        factor: 1.5,
    },
];

static FOOD_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: FieldKey::Meat,
        label: "Meat meals per week",
        max: 14.0,
        unit: "meals",
        factor: 6.0,
    },
    FieldSpec {
        key: FieldKey::Dairy,
        label: "Dairy servings per day",
        max: 5.0,
        unit: "servings",
        factor: 1.5,
    },
    FieldSpec {
        key: FieldKey::Vegetables,
        label: "Vegetable servings per day",
        max: 10.0,
        unit: "servings",
        factor: -0.5,
    },
];

static CONSUMPTION_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        key: FieldKey::Shopping,
        label: "Non-essential purchases per month",
        max: 10.0,
        unit: "purchases",
        factor: 10.0,
    },
    FieldSpec {
        key: FieldKey::Waste,
        label: "Rubbish bags per week",
        max: 5.0,
        unit: "bags",
        factor: 5.0,
    },
    FieldSpec {
        key: FieldKey::Recycling,
        label: "Recycling level (0-5)",
        max: 5.0,
        unit: "level",
        factor: -2.0,
    },
];
