use tracing::debug;

use crate::{
    ast::{Block, Node, Program},
    error::RuntimeError,
    interpreter::value::{core::Value, environment::Environment},
    util::stack::guarded,
};

/// Result type used by the evaluator.
///
/// `Ok(None)` is a node that yields no value (such as an assignment);
/// `Err` is a failure that will be recorded as a diagnostic once it reaches a
/// node that tolerates missing values.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Deepest nesting of function calls before a call is refused.
///
/// Evaluation grows its stack on the heap, so this bounds the memory of
/// runaway recursion rather than protecting the native stack.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Walks syntax trees and computes their values.
///
/// Failures never stop evaluation: the failing node yields no value and the
/// error is kept in [`Evaluator::diagnostics`]. Block children, assignment
/// values, call arguments and top-level forms tolerate missing values; every
/// other node passes the failure up to them.
///
/// ## Usage
///
/// ```
/// use castellano::interpreter::{evaluator::core::Evaluator, lexer::Lexer, parser::Parser};
///
/// let program = Parser::new(Lexer::new("a := 2. a * 21")).parse_program();
/// let mut evaluator = Evaluator::new();
///
/// let value = evaluator.evaluate_program(&program);
/// assert_eq!(value.map(|v| v.to_string()), Some("42".to_string()));
/// assert!(evaluator.diagnostics().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    diagnostics:      Vec<RuntimeError>,
    pub(crate) depth: usize,
}

impl Evaluator {
    /// Creates an evaluator with no recorded diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates every top-level form in a fresh top-level environment.
    ///
    /// # Returns
    /// The value of the last form, or `None` when the program is empty or the
    /// last form yields no value.
    pub fn evaluate_program<'ast>(&mut self, program: &'ast Program) -> Option<Value<'ast>> {
        let mut env = Environment::new();
        let mut result = None;
        for form in &program.forms {
            result = self.evaluate(form, &mut env);
        }
        result
    }

    /// Errors recorded so far, in the order they happened.
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    /// Takes the recorded errors, leaving none behind.
    pub fn take_diagnostics(&mut self) -> Vec<RuntimeError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Evaluates a node, turning a failure into no value.
    ///
    /// The failure is recorded as a diagnostic.
    pub fn evaluate<'ast>(&mut self,
                          node: &'ast Node,
                          env: &mut Environment<'ast>)
                          -> Option<Value<'ast>> {
        match self.eval(node, env) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, "evaluation produced no value");
                self.diagnostics.push(error);
                None
            },
        }
    }

    /// Evaluates a node and returns its value.
    ///
    /// The evaluator dispatches based on node variant: assignments, literals,
    /// identifiers, operators, conditionals, loops, function literals and
    /// calls.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for nodes that
    /// do not yield one.
    ///
    /// # Errors
    /// The first failure found while evaluating the node and its operands.
    pub fn eval<'ast>(&mut self,
                      node: &'ast Node,
                      env: &mut Environment<'ast>)
                      -> EvalResult<Option<Value<'ast>>> {
        guarded(|| self.dispatch(node, env))
    }

    fn dispatch<'ast>(&mut self,
                      node: &'ast Node,
                      env: &mut Environment<'ast>)
                      -> EvalResult<Option<Value<'ast>>> {
        match node {
            Node::Assignment { name, value, .. } => {
                let value = self.evaluate(value, env);
                env.assign(name, value);
                Ok(None)
            },
            Node::Boolean { value, .. } => Ok(Some(Value::Boolean(*value))),
            Node::Integer { value, .. } => Ok(Some(Value::Integer(*value))),
            Node::Identifier { name, position } => {
                env.get(name)
                   .map(Some)
                   .ok_or_else(|| RuntimeError::UnknownIdentifier { name:     name.clone(),
                                                                    position: *position, })
            },
            Node::Infix { left,
                          op,
                          right,
                          position, } => self.eval_infix(left, *op, right, *position, env).map(Some),
            Node::Minus { operand, position } => self.eval_minus(operand, *position, env).map(Some),
            Node::Not { operand, position } => self.eval_not(operand, *position, env).map(Some),
            Node::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Node::While { condition, body, .. } => self.eval_while(condition, body, env),
            Node::Function(function) => Ok(Some(Value::Function(function))),
            Node::FunctionCall { callee,
                                 arguments,
                                 position, } => self.eval_call(callee, arguments, *position, env),
        }
    }

    /// Evaluates the forms of a block in order.
    ///
    /// # Returns
    /// The last value produced by any form of the block, or `None` if none
    /// produced one.
    pub fn eval_block<'ast>(&mut self,
                            block: &'ast Block,
                            env: &mut Environment<'ast>)
                            -> Option<Value<'ast>> {
        block.forms
             .iter()
             .fold(None, |last, form| self.evaluate(form, env).or(last))
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Errors
    /// `MissingValue` if the node yields no value, or the node's own failure.
    pub(crate) fn eval_operand<'ast>(&mut self,
                                     node: &'ast Node,
                                     env: &mut Environment<'ast>)
                                     -> EvalResult<Value<'ast>> {
        self.eval(node, env)?
            .ok_or(RuntimeError::MissingValue { position: node.position() })
    }
}
