//! # Schoolbook App
//!
//! Drives a schoolbook run on top of any [`SchoolStore`]: optionally
//! populates the store with the sample school, then renders a JSON report
//! of its students, teachers, courses and schedules.
//!
//! - **Config**: environment configuration and the invalid-record policy
//! - **Seed**: sample data and the population routine
//! - **Report**: report model and rendering

/// Configuration loaded from the environment
pub mod config;
/// Report model and JSON rendering
pub mod report;
/// Sample data and store population
pub mod seed;

use eyre::Result;
use schoolbook_db::SchoolStore;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;
use crate::seed::SampleData;

/// Installs the global tracing subscriber at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Seeds the sample school when configured to and the store has no courses
/// yet, then returns the rendered report.
///
/// # Errors
///
/// Returns the first rejected record under
/// [`config::InvalidRecordPolicy::Abort`], and any storage failure.
pub async fn run<S>(config: &AppConfig, store: &S) -> Result<String>
where
    S: SchoolStore + ?Sized,
{
    if config.seed_sample_data {
        if store.list_courses().await?.is_empty() {
            info!(
                "Seeding sample data (invalid record policy: {})",
                config.invalid_record_policy
            );
            seed::seed(store, &SampleData::standard(), config.invalid_record_policy).await?;
        } else {
            info!("Store already holds courses, skipping sample data");
        }
    }

    let report = report::build_report(store).await?;
    info!(
        "Report covers {} students, {} teachers, {} courses, {} schedules",
        report.students.len(),
        report.teachers.len(),
        report.courses.len(),
        report.schedules.len()
    );

    report::render(&report, config.report_pretty)
}
