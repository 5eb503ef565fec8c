mod args;

use anyhow::Context as _;
use args::Args;
use clap::Parser;
use graphql_typegen::{generate_typescript_to_file, GenerateOptions, SchemaSource};
use std::fs;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let base_options = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read configuration file {}", path.display()))?;
            serde_json::from_str::<GenerateOptions>(&raw)
                .with_context(|| format!("invalid configuration file {}", path.display()))?
        }
        None => GenerateOptions::default(),
    };
    let options = args.apply(base_options);

    let source = SchemaSource::detect(&args.schema);
    generate_typescript_to_file(&source, &args.output, &options)
        .with_context(|| format!("failed to generate definitions from {}", args.schema))?;

    println!("TypeScript generated at: {}", args.output.display());
    Ok(())
}
