use crate::dataflow::Dataflow;
use crate::encoder::{RenderStyle, encode};
use crate::error::RenderError;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Dataflow {
    /// Writes the tree view followed by the pretty-printed document to `path`,
    /// creating parent directories as needed.
    pub fn write_debug_file(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let document = encode(self)?.render_with(RenderStyle::Pretty)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{}\n{}\n", self, document))?;
        debug!(path = %path.display(), "wrote dataflow debug file");
        Ok(())
    }
}
