use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::{core::Value, environment::Environment},
    },
};

impl Evaluator {
    /// Evaluates `-operand`. Negation wraps, so `-(i64::MIN)` is `i64::MIN`.
    ///
    /// # Errors
    /// - `ExpectedInteger` if the operand is not an integer.
    /// - `MissingValue` if it yields no value.
    pub(crate) fn eval_minus<'ast>(&mut self,
                                   operand: &'ast Node,
                                   position: Position,
                                   env: &mut Environment<'ast>)
                                   -> EvalResult<Value<'ast>> {
        let value = self.eval_operand(operand, env)?;
        Ok(Value::Integer(value.as_integer(position)?.wrapping_neg()))
    }

    /// Evaluates `no operand`.
    ///
    /// # Errors
    /// - `ExpectedBoolean` if the operand is not a boolean.
    /// - `MissingValue` if it yields no value.
    pub(crate) fn eval_not<'ast>(&mut self,
                                 operand: &'ast Node,
                                 position: Position,
                                 env: &mut Environment<'ast>)
                                 -> EvalResult<Value<'ast>> {
        let value = self.eval_operand(operand, env)?;
        Ok(Value::Boolean(!value.as_boolean(position)?))
    }
}
