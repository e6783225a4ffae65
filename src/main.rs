//! CLI tool to generate API documentation from method-registry.json.
//!
//! Usage: `cargo run --bin generate-api-docs`
//!
//! Outputs the aggregate document and one file per service to `docs/api`.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fo3_api_docgen::{registry::MethodRegistry, writer};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fo3_api_docgen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("FO3 Wallet Core API documentation generator");

    let registry = MethodRegistry::embedded();
    tracing::info!(
        "Registry loaded: {} services, {} methods",
        registry.services.len(),
        registry.total_method_count()
    );

    for warning in registry.validate() {
        tracing::warn!("{}", warning);
    }

    let out_dir = Path::new("docs/api");
    let written = writer::write_docs(registry, out_dir)?;

    tracing::info!("Documentation generation completed");
    for path in &written {
        tracing::info!("  {}", path.display());
    }

    Ok(())
}
