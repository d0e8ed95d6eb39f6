use crate::{
    ast::{Block, Node},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{core::Value, environment::Environment},
    },
};

impl Evaluator {
    /// Evaluates `mientras condition body`.
    ///
    /// The condition is checked before every iteration and must be a boolean
    /// each time. The body runs in the enclosing environment, so its
    /// assignments are visible to the condition.
    ///
    /// # Returns
    /// The value of the last iteration's body, or `None` if the body never
    /// ran.
    ///
    /// # Errors
    /// `ExpectedBoolean` as soon as the condition is not a boolean; the
    /// values of previous iterations are discarded.
    pub(crate) fn eval_while<'ast>(&mut self,
                                   condition: &'ast Node,
                                   body: &'ast Block,
                                   env: &mut Environment<'ast>)
                                   -> EvalResult<Option<Value<'ast>>> {
        let mut result = None;
        while self.eval_condition(condition, env)? {
            result = self.eval_block(body, env);
        }
        Ok(result)
    }
}
