//! Quillc - host runner for Quill programs.
//!
//! Parsing is left to the embedding host: it hands over a built
//! [`Program`] and the [`StringInterner`] that owns its names. This crate
//! wires up logging, configures an interpreter, runs the program and turns
//! the outcome into a report and an exit status.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Once;

use quill_eval::{EvalError, InterpreterBuilder, SharedPrintHandler, DEFAULT_MAX_CALL_DEPTH};
use quill_ir::{Program, StringInterner};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=quill_eval=debug` for calls or `RUST_LOG=quill_eval=trace` for
/// every statement.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}

/// Settings for a single run.
#[derive(Clone)]
pub struct RunOptions {
    /// Maximum nesting of function calls; `None` for no limit.
    pub max_call_depth: Option<usize>,
    /// Destination of `print` output; stdout when unset.
    pub print_handler: Option<SharedPrintHandler>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            print_handler: None,
        }
    }
}

/// Run `program` in a fresh interpreter.
pub fn run_program(
    program: &Program,
    interner: &StringInterner,
    options: &RunOptions,
) -> Result<(), EvalError> {
    let mut builder = InterpreterBuilder::new(interner).max_call_depth(options.max_call_depth);
    if let Some(handler) = &options.print_handler {
        builder = builder.print_handler(handler.clone());
    }
    let mut interpreter = builder.build();

    let result = interpreter.run(program);
    if let Err(err) = &result {
        tracing::debug!(kind = ?err.kind, "program failed");
    }
    result
}

/// Write a runtime error in the runner's report format.
///
/// ```text
/// error: variable 'x' is not defined
/// stack backtrace:
///   0: inner
///   1: outer
/// ```
pub fn report(err: &EvalError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "error: {}", err.message)?;
    if let Some(backtrace) = &err.backtrace {
        write!(out, "{backtrace}")?;
    }
    Ok(())
}

/// Report any error on stderr and map the outcome to an exit status.
pub fn finish(result: &Result<(), EvalError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = report(err, &mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
