//! Roll-ups over already materialised footprint records for dashboard and analytics views.

mod aggregator;
mod period;
mod stats;


pub use aggregator::{
    aggregate, AggregationSummary, CategoryTotals, MonthlyTotals, PeriodTotal, Totals,
};
pub use period::{ParsePeriodError, Period};
pub use stats::{CommunityComparison, FootprintStats, Standing};
