use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sturgeon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    sturgeon_cli::SturgeonCli::parse_and_run().await
}
