//! Driver-level errors: everything that can stop compilation before
//! the pipeline itself ever runs, or while writing its output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("usage: nanoc <input-path> <output-path> [--dump-tokens] [--emit-asm-comments]")]
    BadUsage,

    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    CodeGen(#[from] nanoc_gen::CodeGenError),
}
