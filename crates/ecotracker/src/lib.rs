//! EcoTracker core: turns lifestyle inputs into a carbon-footprint score with category
//! breakdown and recommendations, and rolls stored results up for dashboards and analytics.

pub mod analytics;
pub mod config;
pub mod error;
pub mod feedback;
pub mod footprint;
pub mod telemetry;
