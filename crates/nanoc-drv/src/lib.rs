//! Compiler driver: orchestrates lexing, parsing, optimization, and
//! code generation, and owns the process-level error policy.
//!
//! Ground: `compile_file`/`main` in `original_source/src/main.c`.

mod config;
mod error;
mod tokens;

pub use config::Config;
pub use error::DriverError;

use nanoc_gen::CodeGenerator;
use nanoc_opt::{optimize, OptimizerOptions};
use nanoc_par::Parser;
use nanoc_sem::SymbolTable;
use nanoc_util::DiagnosticHandler;

/// Result of a successful run of the pipeline: the driver itself
/// never fails for a source-level problem (a parse error is reported,
/// not raised), so the only signal the caller needs back is whether
/// anything went wrong.
pub struct CompileOutcome {
    pub had_errors: bool,
}

/// Runs the full pipeline and writes the assembly output. Any
/// `Level::Error` diagnostic recorded along the way still lets the
/// (possibly partial) output file be written, but is reflected in
/// `CompileOutcome::had_errors` so the caller can choose a nonzero
/// exit code. See `DESIGN.md` for why this split is more useful than
/// silently succeeding.
pub fn compile(config: &Config) -> Result<CompileOutcome, DriverError> {
    let source = std::fs::read_to_string(&config.input_path).map_err(|source| DriverError::ReadInput {
        path: config.input_path.clone(),
        source,
    })?;

    if config.dump_tokens {
        tokens::dump_tokens(&source);
    }

    log::info!("parsing {}", config.input_path.display());
    let mut diagnostics = DiagnosticHandler::new();
    let ast = {
        let mut parser = Parser::new(&source, &mut diagnostics);
        parser.parse_program()
    };

    log::info!("optimizing");
    let ast = optimize(ast, OptimizerOptions::default());

    log::info!("generating assembly");
    let mut symbol_table = SymbolTable::new();
    let assembly = CodeGenerator::new(&mut symbol_table)
        .with_comments(config.emit_asm_comments)
        .generate(&ast)?;

    std::fs::write(&config.output_path, assembly).map_err(|source| DriverError::WriteOutput {
        path: config.output_path.clone(),
        source,
    })?;

    if diagnostics.has_errors() {
        let stderr = std::io::stderr();
        let _ = diagnostics.emit_to(stderr.lock());
    }

    Ok(CompileOutcome {
        had_errors: diagnostics.has_errors(),
    })
}

/// Parses arguments, runs the pipeline, and returns the process exit
/// code (`0` on a clean compile, `1` if any diagnostic was an error).
pub fn run<I: Iterator<Item = String>>(args: I) -> Result<i32, DriverError> {
    let config = Config::from_args(args)?;
    let outcome = compile(&config)?;
    Ok(if outcome.had_errors { 1 } else { 0 })
}
