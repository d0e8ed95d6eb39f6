use crate::{
    ast::{Block, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, environment::Environment},
    },
};

impl Evaluator {
    /// Evaluates `si condition consequence [sino alternative]`.
    ///
    /// # Returns
    /// The value of the chosen branch, or `None` when the condition is false
    /// and there is no alternative.
    ///
    /// # Errors
    /// `ExpectedBoolean` if the condition is not a boolean.
    pub(crate) fn eval_if<'ast>(&mut self,
                                condition: &'ast Node,
                                consequence: &'ast Block,
                                alternative: Option<&'ast Block>,
                                env: &mut Environment<'ast>)
                                -> EvalResult<Option<Value<'ast>>> {
        let branch = if self.eval_condition(condition, env)? {
            Some(consequence)
        } else {
            alternative
        };

        Ok(branch.and_then(|block| self.eval_block(block, env)))
    }

    /// Evaluates the condition of a `si` or `mientras`.
    ///
    /// # Errors
    /// `ExpectedBoolean` if the condition yields anything but a boolean,
    /// including no value.
    pub(crate) fn eval_condition<'ast>(&mut self,
                                       condition: &'ast Node,
                                       env: &mut Environment<'ast>)
                                       -> EvalResult<bool> {
        let position = condition.position();
        match self.eval(condition, env)? {
            Some(value) => value.as_boolean(position),
            None => Err(RuntimeError::ExpectedBoolean { position }),
        }
    }
}
