use tracing::trace;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, MAX_CALL_DEPTH},
        lexer::Position,
        value::{core::Value, environment::Environment},
    },
};

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The callee is looked up in the caller's environment and must be bound
    /// to a function whose parameter count matches the arguments. Arguments
    /// are evaluated in the caller's environment, left to right; an argument
    /// that yields no value leaves its parameter unbound.
    ///
    /// The body runs in a fresh environment holding only the parameters:
    /// functions do not see the bindings around them, not even their own
    /// name.
    ///
    /// # Returns
    /// The value of the body block.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the callee is unbound.
    /// - `NotAFunction` if it is bound to another kind of value.
    /// - `ArgumentCountMismatch` on arity mismatch.
    /// - `CallDepthExceeded` past [`MAX_CALL_DEPTH`] nested calls.
    pub(crate) fn eval_call<'ast>(&mut self,
                                  callee: &str,
                                  arguments: &'ast [Node],
                                  position: Position,
                                  env: &mut Environment<'ast>)
                                  -> EvalResult<Option<Value<'ast>>> {
        let value = env.get(callee)
                       .ok_or_else(|| RuntimeError::UnknownIdentifier { name: callee.to_string(),
                                                                        position })?;
        let function = value.as_function()
                            .ok_or_else(|| RuntimeError::NotAFunction { name: callee.to_string(),
                                                                        position })?;

        if function.parameters.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: callee.to_string(),
                                                             expected: function.parameters.len(),
                                                             found: arguments.len(),
                                                             position });
        }
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH,
                                                         position });
        }

        let mut call_env = Environment::new();
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            let value = self.evaluate(argument, env);
            call_env.assign(parameter, value);
        }

        trace!(callee, depth = self.depth, "calling function");
        self.depth += 1;
        let result = self.eval_block(&function.body, &mut call_env);
        self.depth -= 1;

        Ok(result)
    }
}
