use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::Result;
use nacre_codegen::{Error, Options, Outcome, Pipeline, Registry};
use nacre_codegen_docs::DocsGenerator;
use nacre_codegen_glue::GlueGenerator;
use nacre_codegen_header::HeaderGenerator;

#[derive(Parser)]
#[command(name = "nacre")]
#[command(version)]
#[command(about = "Generate glue code and documentation from IDL definitions")]
pub(crate) struct Cli {
    /// Input IDL files, processed in the given order
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Generator to run, repeatable; executed in the requested order
    #[arg(long = "generate", value_name = "NAME")]
    generate: Vec<String>,

    /// Binding-model module as name:path, repeatable; overrides by name
    #[arg(long = "binding-module", value_name = "NAME:PATH")]
    binding_modules: Vec<String>,

    /// Generator module as name:path, repeatable; overrides by name
    #[arg(long = "generator-module", value_name = "NAME:PATH")]
    generator_modules: Vec<String>,

    /// Directory generated files are written to, created if absent
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Regenerate even if nothing relevant has changed
    #[arg(long)]
    force: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut registry = Registry::with_builtin_bindings();
        registry.register_generator("header", Arc::new(HeaderGenerator));
        registry.register_generator("glue", Arc::new(GlueGenerator));
        registry.register_generator("docs", Arc::new(DocsGenerator));

        let options = Options {
            inputs: self.files,
            generate: self.generate,
            binding_modules: self.binding_modules,
            generator_modules: self.generator_modules,
            output_dir: self.output_dir,
            force: self.force,
            tool_files: tool_files(),
        };

        match Pipeline::new(registry, options).run() {
            Ok(Outcome::Skipped) => {
                println!("Source files haven't changed: nothing to generate.");
                Ok(())
            }
            Ok(Outcome::Generated {
                written,
                diagnostics,
                ..
            }) => {
                for diagnostic in &diagnostics {
                    if diagnostic.severity.is_warning() {
                        eprintln!("{diagnostic}");
                    }
                }
                println!("Wrote {written} file(s).");
                Ok(())
            }
            Err(Error::Syntax(e)) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// The files embodying the tool itself, folded into the fingerprint so
/// that upgrading the binary invalidates previously generated output.
fn tool_files() -> Vec<PathBuf> {
    std::env::current_exe().ok().into_iter().collect()
}
