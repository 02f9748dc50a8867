use std::path::Path;

use eyre::Result;
use nacre_codegen::Generator;
use nacre_core::OutputFile;
use nacre_syntax::{Namespace, ParsedFile};

use crate::render::render_header;

/// The built-in `header` generator.
///
/// Input files without a header hint (the synthetic built-in files)
/// produce nothing.
pub struct HeaderGenerator;

impl Generator for HeaderGenerator {
    fn name(&self) -> &str {
        "header"
    }

    fn process(
        &self,
        _output_dir: &Path,
        pairs: &[ParsedFile],
        _root: &Namespace,
    ) -> Result<Vec<OutputFile>> {
        let mut files = Vec::new();
        for pair in pairs {
            if let Some(header) = pair.file.header() {
                files.push(OutputFile::new(header, render_header(header, pair)));
            }
        }
        Ok(files)
    }
}
