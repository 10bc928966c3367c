//! Module import.
//!
//! The engine only knows the [`Importer`] trait. [`FileImporter`] is the
//! filesystem implementation used by the CLI: it evaluates a module file in a
//! fresh context and exports the words that module defined.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

use crate::errors::EvalError;
use crate::runtime::Runtime;
use crate::value::Word;

/// File extension appended to module names that have none.
pub const MODULE_EXTENSION: &str = "pile";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No such module: '{0}'")]
    NotFound(String),
    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Import cycle through '{}'", .0.display())]
    Cycle(PathBuf),
    #[error("{module}: {error}")]
    Evaluation { module: String, error: EvalError },
}

/// Resolves module names into the words they define.
pub trait Importer: Send + Sync {
    fn import(&self, runtime: &Arc<Runtime>, name: &str) -> Result<Vec<Word>, ImportError>;
}

/// Loads modules from a list of directories.
pub struct FileImporter {
    roots: Vec<PathBuf>,
    /// Modules currently being evaluated, per thread, to refuse import
    /// cycles. An import chain runs entirely on the thread that started it.
    in_flight: Mutex<FxHashSet<(ThreadId, PathBuf)>>,
}

impl FileImporter {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        FileImporter {
            roots: roots.into_iter().collect(),
            in_flight: Mutex::new(FxHashSet::default()),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First existing file for `name`, trying it as given and then with the
    /// module extension, under each root in order.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        let mut candidates = vec![path.to_path_buf()];
        if path.extension().is_none() {
            candidates.push(path.with_extension(MODULE_EXTENSION));
        }

        if path.is_absolute() {
            return candidates.into_iter().find(|candidate| candidate.is_file());
        }
        self.roots
            .iter()
            .flat_map(|root| candidates.iter().map(move |candidate| root.join(candidate)))
            .find(|candidate| candidate.is_file())
    }

    fn evaluate(
        &self,
        runtime: &Arc<Runtime>,
        name: &str,
        path: &Path,
    ) -> Result<Vec<Word>, ImportError> {
        let source = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut context = runtime.new_context();
        context
            .eval(&source)
            .map_err(|error| ImportError::Evaluation {
                module: name.to_string(),
                error,
            })?;
        Ok(context.dictionary().words().into_iter().cloned().collect())
    }
}

impl Importer for FileImporter {
    fn import(&self, runtime: &Arc<Runtime>, name: &str) -> Result<Vec<Word>, ImportError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| ImportError::NotFound(name.to_string()))?;
        let path = path.canonicalize().unwrap_or(path);

        let key = (thread::current().id(), path);
        if !self.in_flight.lock().insert(key.clone()) {
            return Err(ImportError::Cycle(key.1));
        }
        debug!(module = name, path = %key.1.display(), "evaluating module");
        let result = self.evaluate(runtime, name, &key.1);
        self.in_flight.lock().remove(&key);
        result
    }
}
