//! Generates C# models from a saved introspection response.
//!
//! Run with: `cargo run --example generate_file -- schema.json Shop.Api.Models`

use gqlforge::prelude::*;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .ok_or("usage: generate_file <introspection.json> [namespace]")?;
    let namespace = args.next().unwrap_or_else(|| "GraphQL.Models".to_string());

    let config = GeneratorConfig::new(namespace);
    let source = generate_from_file(&path, &config)?;
    print!("{source}");

    Ok(())
}
