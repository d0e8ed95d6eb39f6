use crate::{
    ast::{InfixOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Position,
        value::{core::Value, environment::Environment},
    },
    util::num::wrapping_division,
};

impl Evaluator {
    /// Evaluates both operands of an infix node, left first, and combines
    /// them.
    ///
    /// # Errors
    /// - `MissingValue` if an operand yields no value.
    /// - Any error from [`Evaluator::eval_binary`].
    pub(crate) fn eval_infix<'ast>(&mut self,
                                   left: &'ast Node,
                                   op: InfixOperator,
                                   right: &'ast Node,
                                   position: Position,
                                   env: &mut Environment<'ast>)
                                   -> EvalResult<Value<'ast>> {
        let left = self.eval_operand(left, env)?;
        let right = self.eval_operand(right, env)?;
        Self::eval_binary(op, left, right, position)
    }

    /// Applies an infix operator to two values of the same kind.
    ///
    /// - `=` compares two integers or two booleans.
    /// - `+`, `-`, `*` and `/` operate on integers, wrapping on overflow.
    ///   Division truncates toward zero.
    ///
    /// # Errors
    /// - `MismatchedOperands` when the operands have different kinds (so
    ///   `1 = verdadero` is an error rather than `falso`).
    /// - `UnsupportedOperation` when the operator is not defined for the kind.
    /// - `DivisionByZero` when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use castellano::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, lexer::Position, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_binary(InfixOperator::Division,
    ///                                Value::Integer(-7),
    ///                                Value::Integer(2),
    ///                                Position::default()).unwrap();
    /// assert_eq!(v, Value::Integer(-3));
    ///
    /// let v = Evaluator::eval_binary(InfixOperator::Equals,
    ///                                Value::Boolean(false),
    ///                                Value::Boolean(false),
    ///                                Position::default()).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    pub fn eval_binary<'ast>(op: InfixOperator,
                             left: Value<'ast>,
                             right: Value<'ast>,
                             position: Position)
                             -> EvalResult<Value<'ast>> {
        use InfixOperator::{Division, Equals, Minus, Multiplication, Plus};

        match (op, left, right) {
            (Equals, Value::Integer(a), Value::Integer(b)) => Ok(Value::Boolean(a == b)),
            (Equals, Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(a == b)),
            (Plus, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_add(b))),
            (Minus, Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a.wrapping_sub(b))),
            (Multiplication, Value::Integer(a), Value::Integer(b)) => {
                Ok(Value::Integer(a.wrapping_mul(b)))
            },
            (Division, Value::Integer(a), Value::Integer(b)) => {
                wrapping_division(a, b).map(Value::Integer)
                                       .ok_or(RuntimeError::DivisionByZero { position })
            },
            (_, left, right) if left.kind_name() != right.kind_name() => {
                Err(RuntimeError::MismatchedOperands { operator: op.to_string(),
                                                       left: left.kind_name(),
                                                       right: right.kind_name(),
                                                       position })
            },
            (_, left, _) => Err(RuntimeError::UnsupportedOperation { operator: op.to_string(),
                                                                    kind: left.kind_name(),
                                                                    position }),
        }
    }
}
