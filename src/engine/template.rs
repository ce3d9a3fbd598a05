//! Opaque template and clause handles.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::EngineError;

/// Handle to a contract template on disk.
///
/// The directory's inner structure (grammar, model, logic) is defined by
/// the engine collaborator; this layer only validates that the directory
/// is present and keeps its location.
#[derive(Debug, Clone)]
pub struct Template {
    directory: PathBuf,
}

impl Template {
    /// Obtain a template handle from a directory.
    pub async fn from_directory(directory: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let directory = directory.into();
        match tokio::fs::metadata(&directory).await {
            Ok(meta) if meta.is_dir() => Ok(Self { directory }),
            Ok(_) => Err(EngineError::Template(format!(
                "{} is not a directory",
                directory.display()
            ))),
            Err(e) => Err(EngineError::Template(format!(
                "{}: {}",
                directory.display(),
                e
            ))),
        }
    }

    /// Directory the template was loaded from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// A clause bound to a template, carrying the contract data the engine
/// evaluates it against.
#[derive(Debug, Clone)]
pub struct Clause {
    template: Template,
    data: Value,
}

impl Clause {
    /// Bind a new clause to `template` with no data yet.
    pub fn new(template: Template) -> Self {
        Self {
            template,
            data: Value::Null,
        }
    }

    /// Inject the contract data configuration.
    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    /// The template this clause is bound to.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The injected contract data.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
