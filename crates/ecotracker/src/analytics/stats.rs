use crate::footprint::FootprintRecord;
use serde::Serialize;

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintStats {
    pub record_count: usize,
    pub total_footprint: f64,
    pub average_footprint: f64,
}

impl FootprintStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FootprintRecord>,
    {
        let mut totals: Vec<f64> = records
            .into_iter()
            .map(|record| record.total_footprint)
            .collect();
        // Ascending order keeps the sum independent of record order.
        totals.sort_by(f64::total_cmp);

        let record_count = totals.len();
        let total_footprint: f64 = totals.iter().sum();

        let average_footprint = if record_count > 0 {
            total_footprint / record_count as f64
        } else {
            0.0
        };

        Self {
            record_count,
            total_footprint,
            average_footprint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    BelowAverage,
    AboveAverage,
}

impl Standing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowAverage => "Below community average",
            Self::AboveAverage => "Above community average",
        }
    }
}

/// A user's average footprint against the community average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityComparison {
    pub user_average: f64,
    pub community_average: f64,
    pub difference: f64,
    pub standing: Standing,
    pub standing_label: &'static str,
}

impl CommunityComparison {
    /// Equal averages count as above average.
    pub fn between(user: &FootprintStats, community: &FootprintStats) -> Self {
        let standing = if user.average_footprint < community.average_footprint {
            Standing::BelowAverage
        } else {
            Standing::AboveAverage
        };

        Self {
            user_average: user.average_footprint,
            community_average: community.average_footprint,
            difference: (user.average_footprint - community.average_footprint).abs(),
            standing,
            standing_label: standing.label(),
        }
    }
}
