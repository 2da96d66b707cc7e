use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};
use sturgeon::{FieldRequest, Sturgeon};
use sturgeon_core::schema::{Selection, SelectionSet};

#[derive(Parser, Debug)]
pub struct QueryCommand {
    /// Root field to run, e.g. `logs` or `logs_by_id`
    pub field: String,

    /// Field arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,

    /// Selected sub-fields; nest with a dot, e.g. `max.price`
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,
}

impl QueryCommand {
    pub(crate) async fn run(self, db: &Sturgeon) -> Result<()> {
        let args: Map<String, Value> =
            serde_json::from_str(&self.args).context("`--args` must be a JSON object")?;

        let request = FieldRequest::new(&self.field)
            .args(args)
            .select(selection(&self.select));

        let value = db.resolve(request).await?;

        let mut output = Map::new();
        output.insert(self.field, value);
        println!("{}", serde_json::to_string_pretty(&Value::Object(output))?);

        Ok(())
    }
}

/// Builds a selection set from dotted paths, merging shared prefixes.
fn selection(paths: &[String]) -> SelectionSet {
    let mut set = SelectionSet::new();

    for path in paths {
        let path = path.trim();
        if !path.is_empty() {
            insert(&mut set, path.split('.'));
        }
    }

    set
}

fn insert<'a>(set: &mut SelectionSet, mut path: impl Iterator<Item = &'a str>) {
    let Some(name) = path.next() else { return };

    let index = match set.fields.iter().position(|field| field.name == name) {
        Some(index) => index,
        None => {
            set.fields.push(Selection::leaf(name));
            set.fields.len() - 1
        }
    };

    insert(&mut set.fields[index].selection_set, path);
}
