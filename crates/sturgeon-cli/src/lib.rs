mod config;
pub use config::ConnectArgs;

mod query;
pub use query::QueryCommand;

mod schema;
pub use schema::SchemaCommand;

use anyhow::Result;
use clap::Parser;

/// Command line front end: connects to the store and prints the generated
/// schema or runs one root field.
pub struct SturgeonCli;

impl SturgeonCli {
    /// Parse and execute CLI commands from command-line arguments
    pub async fn parse_and_run() -> Result<()> {
        Cli::parse().run().await
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub async fn parse_from<I, T>(args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args)?.run().await
    }
}

#[derive(Parser, Debug)]
#[command(name = "sturgeon")]
#[command(about = "Typed queries over Elasticsearch collections")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connect: ConnectArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the generated schema
    Schema(SchemaCommand),

    /// Run one root field and print the result as JSON
    Query(QueryCommand),
}

impl Cli {
    async fn run(self) -> Result<()> {
        let db = self.connect.connect().await?;

        match self.command {
            Command::Schema(cmd) => cmd.run(&db),
            Command::Query(cmd) => cmd.run(&db).await,
        }
    }
}
