pub mod error;

use std::path::Path;

use indexmap::IndexMap;
use schemars::schema::RootSchema;
use schemars::schema_for;
use tempfile::NamedTempFile;
use tracing::info;

use crate::model::{
    Diagnostic, Location, NotificationMessage, Position, Range, RequestMessage, ResponseMessage,
    TextEdit,
};
pub use error::SchemaError;
use error::Result;

/// JSON Schema descriptions of the exported top-level structures, in output
/// order.
pub fn registry() -> IndexMap<&'static str, RootSchema> {
    let mut schemas = IndexMap::new();
    schemas.insert("Position", schema_for!(Position));
    schemas.insert("Range", schema_for!(Range));
    schemas.insert("Location", schema_for!(Location));
    schemas.insert("Diagnostic", schema_for!(Diagnostic));
    schemas.insert("TextEdit", schema_for!(TextEdit));
    schemas.insert("RequestMessage", schema_for!(RequestMessage));
    schemas.insert("ResponseMessage", schema_for!(ResponseMessage));
    schemas.insert("NotificationMessage", schema_for!(NotificationMessage));
    schemas
}

/// Write the schema registry to `path` as pretty-printed JSON.
///
/// The content goes to a temporary file in the destination directory first
/// and is renamed over the target, so a failed write never leaves a
/// truncated schema file behind. An existing file at `path` is replaced.
pub fn write_schema_file(path: &Path) -> Result<()> {
    let schemas = registry();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(tmp.as_file(), &schemas)?;
    tmp.persist(path)?;

    info!("Schema descriptions written to {}", path.display());
    Ok(())
}
