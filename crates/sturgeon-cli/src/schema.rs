use anyhow::Result;
use clap::Parser;
use sturgeon::Sturgeon;

#[derive(Parser, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub(crate) fn run(self, db: &Sturgeon) -> Result<()> {
        print!("{}", db.schema());
        Ok(())
    }
}
