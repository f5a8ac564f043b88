use crate::infra::{InMemoryFeedbackRepository, InMemoryFootprintRepository};
use chrono::{DateTime, Months, Utc};
use clap::Args;
use ecotracker::config::AppConfig;
use ecotracker::error::AppError;
use ecotracker::feedback::{FeedbackCategory, FeedbackService, FeedbackSubmission, MAX_RATING};
use ecotracker::footprint::{
    build_at, CategoryKey, FieldKey, FootprintInput, FootprintRepository, FootprintResult,
    FootprintService,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CalculateArgs {
    /// Kilometres driven per week
    #[arg(long)]
    pub(crate) car_km: Option<f64>,
    /// Public transport trips per week
    #[arg(long)]
    pub(crate) public_transport: Option<f64>,
    /// Flights per year
    #[arg(long)]
    pub(crate) flights: Option<f64>,
    /// Electricity use in kWh per month
    #[arg(long)]
    pub(crate) electricity: Option<f64>,
    /// Gas use in m³ per month
    #[arg(long)]
    pub(crate) gas: Option<f64>,
    /// Heating level (0-100)
    #[arg(long)]
    pub(crate) heating: Option<f64>,
    /// Meat meals per week
    #[arg(long)]
    pub(crate) meat: Option<f64>,
    /// Dairy portions per day
    #[arg(long)]
    pub(crate) dairy: Option<f64>,
    /// Vegetable portions per day
    #[arg(long)]
    pub(crate) vegetables: Option<f64>,
    /// Shopping intensity (0-10)
    #[arg(long)]
    pub(crate) shopping: Option<f64>,
    /// Waste level (0-5)
    #[arg(long)]
    pub(crate) waste: Option<f64>,
    /// Recycling level (0-5)
    #[arg(long)]
    pub(crate) recycling: Option<f64>,
    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl CalculateArgs {
    fn input(&self) -> FootprintInput {
        let supplied = [
            (FieldKey::CarKm, self.car_km),
            (FieldKey::PublicTransport, self.public_transport),
            (FieldKey::Flights, self.flights),
            (FieldKey::Electricity, self.electricity),
            (FieldKey::Gas, self.gas),
            (FieldKey::Heating, self.heating),
            (FieldKey::Meat, self.meat),
            (FieldKey::Dairy, self.dairy),
            (FieldKey::Vegetables, self.vegetables),
            (FieldKey::Shopping, self.shopping),
            (FieldKey::Waste, self.waste),
            (FieldKey::Recycling, self.recycling),
        ];

        supplied
            .into_iter()
            .fold(FootprintInput::new(), |input, (field, value)| match value {
                Some(value) => input.with(field, value),
                None => input,
            })
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of past months to seed for each demo user
    #[arg(long, default_value_t = 3)]
    pub(crate) months: u32,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self { months: 3 }
    }
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let input = args.input();
    let service = FootprintService::new(
        Arc::new(InMemoryFootprintRepository::default()),
        config.recommendations,
    );
    let result = service.assess(&input);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Result unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    if input.is_empty() {
        println!("No values supplied; every field counts as zero.\n");
    }
    render_result(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let repository = Arc::new(InMemoryFootprintRepository::default());
    let service = FootprintService::new(repository.clone(), config.recommendations);

    println!("EcoTracker demo");
    seed_history(&service, repository.as_ref(), args.months, Utc::now())?;

    let overview = service.overview("ana")?;
    let community = service.community()?;
    let comparison = service.comparison("ana")?;

    println!(
        "\nDashboard for ana: {} calculations, average {:.1} kg CO2e",
        overview.stats.record_count, overview.stats.average_footprint
    );
    println!("Monthly totals");
    for entry in overview.summary.monthly_totals.chronological() {
        println!("  {}: {:.1}", entry.period, entry.total);
    }
    println!("Category totals");
    for (category, total) in overview.summary.category_totals.iter() {
        println!("  {:<12} {:.1}", category.label(), total);
    }
    println!("Recent calculations");
    for record in &overview.recent {
        println!(
            "  {} {:.1} ({})",
            record.date.format("%Y-%m-%d"),
            record.total_footprint,
            record.level().label()
        );
    }

    println!(
        "\nCommunity: {} calculations, average {:.1} kg CO2e",
        community.stats.record_count, community.stats.average_footprint
    );
    println!(
        "ana vs community: {} (difference {:.1})",
        comparison.standing_label, comparison.difference
    );

    let feedback = FeedbackService::new(Arc::new(InMemoryFeedbackRepository::default()));
    let submissions = [
        (
            "ana",
            FeedbackSubmission {
                rating: 5,
                category: FeedbackCategory::Accuracy,
                message: "Monthly charts make progress easy to follow.".to_string(),
                suggestion: Some("Add a yearly view.".to_string()),
            },
        ),
        (
            "bruno",
            FeedbackSubmission {
                rating: 4,
                category: FeedbackCategory::Usability,
                message: "Sliders are quick to fill in.".to_string(),
                suggestion: None,
            },
        ),
    ];
    for (owner, submission) in submissions {
        if let Err(err) = feedback.submit(owner, None, submission) {
            println!("\nFeedback from {owner} rejected: {err}");
        }
    }
    let summary = feedback.summary()?;
    println!(
        "\nFeedback: {} entries, average {:.1} stars, {:.0}% rated {}",
        summary.total,
        summary.average_rating,
        summary.share_of(MAX_RATING) * 100.0,
        MAX_RATING
    );

    Ok(())
}

/// Store one record per demo user for each of the last `months` months. Past months are
/// back-dated; the current month goes through a regular submission.
fn seed_history<R>(
    service: &FootprintService<R>,
    repository: &R,
    months: u32,
    now: DateTime<Utc>,
) -> Result<(), AppError>
where
    R: FootprintRepository + 'static,
{
    for offset in (0..months.max(1)).rev() {
        let step = f64::from(offset);
        for (owner, input) in [("ana", commuter(step)), ("bruno", homebody(step))] {
            if offset == 0 {
                service.submit(owner, &input)?;
                continue;
            }
            let date = now.checked_sub_months(Months::new(offset)).unwrap_or(now);
            repository.insert(build_at(owner, &input, service.assess(&input), date)?)?;
        }
    }
    Ok(())
}

/// Car-heavy profile that improves a little each month.
fn commuter(months_ago: f64) -> FootprintInput {
    FootprintInput::new()
        .with(FieldKey::CarKm, 120.0 + 20.0 * months_ago)
        .with(FieldKey::PublicTransport, 10.0)
        .with(FieldKey::Electricity, 220.0)
        .with(FieldKey::Meat, 5.0)
        .with(FieldKey::Dairy, 2.0)
        .with(FieldKey::Vegetables, 3.0)
        .with(FieldKey::Shopping, 4.0)
        .with(FieldKey::Waste, 2.0)
        .with(FieldKey::Recycling, 2.0 + months_ago.min(3.0))
}

fn homebody(months_ago: f64) -> FootprintInput {
    FootprintInput::new()
        .with(FieldKey::PublicTransport, 15.0)
        .with(FieldKey::Electricity, 340.0 - 10.0 * months_ago)
        .with(FieldKey::Gas, 40.0)
        .with(FieldKey::Heating, 60.0)
        .with(FieldKey::Meat, 1.0)
        .with(FieldKey::Vegetables, 6.0)
        .with(FieldKey::Recycling, 5.0)
}

fn render_result(result: &FootprintResult) {
    println!("Carbon footprint");
    for category in CategoryKey::ordered() {
        let value = result.categories.get(&category).copied().unwrap_or(0.0);
        println!("  {:<12} {:>8.1} kg CO2e", category.label(), value);
    }
    println!(
        "  {:<12} {:>8.1} kg CO2e ({})",
        "Total",
        result.total_footprint,
        result.level().label()
    );

    println!("\nRecommendations");
    for recommendation in &result.recommendations {
        println!("- {recommendation}");
    }
}
