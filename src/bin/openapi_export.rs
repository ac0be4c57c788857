// Prints the OpenAPI document of the service
// Usage: cargo run --bin openapi_export > openapi.json

use anyhow::{Context, Result};
use utoipa::OpenApi;

use structured_errors::api::openapi::ApiDoc;

fn main() -> Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialize OpenAPI document")?;
    println!("{}", json);
    Ok(())
}
