use std::io;
use std::process::ExitCode;
use tracing::error;
use bookshelf::catalog::controller::CatalogController;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::command::CommandError;
use bookshelf::core::domain::Configuration;
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::logs::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Configuration::default();
    setup_tracing(config.log_level);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "catalog session aborted");
            eprintln!("fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Configuration) -> Result<(), CommandError> {
    // a corrupt or unreadable catalog file stops here, before anything can overwrite it
    let mut catalog = create_catalog_service(config, RepositoryStore::JsonFile).await?;
    let mut controller = CatalogController::new(io::stdin().lock(), io::stdout());
    controller.run(&mut *catalog).await
}
