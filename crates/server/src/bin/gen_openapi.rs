use anyhow::Context;
use server::openapi::ApiDoc;
use utoipa::OpenApi;

/// Print the OpenAPI document, or write it to the path given as the first
/// argument.
fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document to JSON")?;

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, doc).with_context(|| format!("Failed to write {path}"))?
        }
        None => println!("{doc}"),
    }
    Ok(())
}
