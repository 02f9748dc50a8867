use std::path::Path;

use eyre::Result;
use nacre_codegen::Generator;
use nacre_core::OutputFile;
use nacre_syntax::{Namespace, ParsedFile};

use crate::render::{render_glue_header, render_glue_impl};

/// The built-in `glue` generator.
///
/// Emits the script-binding pair for every input file carrying glue
/// output hints; files without them (the synthetic built-in files)
/// produce nothing.
pub struct GlueGenerator;

impl Generator for GlueGenerator {
    fn name(&self) -> &str {
        "glue"
    }

    fn process(
        &self,
        _output_dir: &Path,
        pairs: &[ParsedFile],
        _root: &Namespace,
    ) -> Result<Vec<OutputFile>> {
        let mut files = Vec::new();
        for pair in pairs {
            let (Some(header), Some(source)) =
                (pair.file.binding_header(), pair.file.binding_impl())
            else {
                continue;
            };
            files.push(OutputFile::new(header, render_glue_header(header, pair)));
            files.push(OutputFile::new(source, render_glue_impl(header, pair)));
        }
        Ok(files)
    }
}
