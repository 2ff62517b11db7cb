use anyhow::{Context, Result};
use clap::Parser;
use lambda_cleanup::{
    cli::{Application, SubCommands},
    release, run_clean,
};

#[tokio::main]
async fn main() {
    let app = Application::parse();

    tracing_subscriber::fmt()
        .with_max_level(if app.global.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = handle_command(app).await {
        tracing::error!("command failed: {:?}", err);
        std::process::exit(1);
    }
}

async fn handle_command(app: Application) -> Result<()> {
    match app.command {
        SubCommands::Clean(args) => {
            run_clean(&app.global, args.count)
                .await
                .context("failed to clean up lambda versions")?;
        }
        SubCommands::Version(args) => {
            let current = env!("CARGO_PKG_VERSION");
            tracing::info!("lambda-cleanup v{}", current);
            let status = release::check_for_new_release(&args.repository, current)
                .await
                .context("unable to check for new releases")?;
            tracing::info!("{}", status.message());
        }
    }

    Ok(())
}
