//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::{stdout_handler, Environment, FunctionTable, SharedPrintHandler};
use quill_ir::StringInterner;

/// Call depth allowed when the builder is not told otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Builder for creating Interpreter instances.
///
/// ```text
/// let interpreter = InterpreterBuilder::new(&interner)
///     .print_handler(buffer_handler())
///     .max_call_depth(Some(64))
///     .build();
/// ```
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            env: None,
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print` output goes. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit the number of nested function calls. `None` removes the limit;
    /// native stack growth still protects against overflow.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            functions: FunctionTable::new(),
            call_stack: CallStack::new(self.max_call_depth),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
