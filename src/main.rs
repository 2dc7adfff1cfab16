use color_eyre::eyre::Result;
use dotenv::dotenv;
use schoolbook_app::config::AppConfig;
use schoolbook_db::{PgSchoolStore, create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;
    schoolbook_app::init_tracing(config.log_level)?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let store = PgSchoolStore::new(db_pool);
    let report = schoolbook_app::run(&config, &store).await?;
    println!("{report}");

    Ok(())
}
