use binstash::api::build_app;
use binstash::app_data::AppData;
use binstash::cli::{export, Cli, Commands};
use binstash::config::{init_database, init_logging, migrate_database, BootstrapSettings};
use clap::Parser;
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let db = init_database(&settings).await?;
    migrate_database(&db).await?;

    match cli.selected_command() {
        Commands::Migrate => {
            tracing::info!("Migrations applied to {}", settings.database_url());
        }
        Commands::Export { output } => {
            let app_data = AppData::init(db, &settings);
            export::export_bins(&app_data.bin_service, output.as_deref()).await?;
        }
        Commands::Serve => {
            let app_data = AppData::init(db, &settings);
            let app = build_app(&app_data, settings.public_base_url());

            let address = settings.server_address();
            tracing::info!("Starting server on http://{}", address);
            tracing::info!("Swagger UI available at {}/swagger", settings.public_base_url());

            Server::new(TcpListener::bind(address))
                .run(app)
                .await?;
        }
    }

    Ok(())
}
