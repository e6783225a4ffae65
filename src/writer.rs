//! Documentation file writer.
//!
//! Persists the assembled document and the per-service fragments to an output
//! directory. Writes are sequential; any filesystem error aborts the run and
//! propagates to the caller unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::MethodRegistry;
use crate::render;

/// File name of the aggregate document.
pub const AGGREGATE_FILE: &str = "api_documentation.md";

/// Error type for documentation writes.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write '{path}': {source}")]
    WriteFile {
        path: String,
        source: std::io::Error,
    },
}

/// Render all documentation and write it under `out_dir`.
///
/// Creates the directory (including parents) if it does not exist. Emits the
/// aggregate document plus one `<service>_api.md` file per service, named by
/// the lower-cased service identifier, overwriting existing files. Returns
/// the written paths in write order.
pub fn write_docs(registry: &MethodRegistry, out_dir: &Path) -> Result<Vec<PathBuf>, WriterError> {
    fs::create_dir_all(out_dir).map_err(|e| WriterError::CreateDir {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();

    let full_doc = render::render_full_document(registry);
    let path = out_dir.join(AGGREGATE_FILE);
    write_file(&path, &full_doc)?;
    written.push(path);

    for service in &registry.services {
        let doc = render::render_service(service);
        let path = out_dir.join(format!("{}_api.md", service.name.to_lowercase()));
        write_file(&path, &doc)?;
        written.push(path);
    }

    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<(), WriterError> {
    fs::write(path, content).map_err(|e| WriterError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
