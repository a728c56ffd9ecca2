//! services/api/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for the LinkShare routes. The output path is
//! the first argument, `openapi.json` when omitted.

use linkshare_api::web::ApiDoc;
use std::path::{Path, PathBuf};
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn write_document(api_doc: &utoipa::openapi::OpenApi, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let document = serde_json::to_string_pretty(api_doc)?;
    std::fs::write(path, document)?;
    println!(
        "OpenAPI document with {} paths written to {}",
        api_doc.paths.paths.len(),
        path.display()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    write_document(&ApiDoc::openapi(), &path)
}
