use std::fmt;

use crate::{
    interpreter::lexer::{Position, TokenKind},
    util::stack::guarded,
};

/// The root of a parsed source: every top-level form in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level forms.
    pub forms: Vec<Node>,
}

/// A sequence of forms evaluated in order.
///
/// Produced both by braced blocks (`{ a := 1. a }`) and by a single bare form
/// after `si`, `sino`, `mientras` or a function parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// The forms of the block.
    pub forms: Vec<Node>,
}

/// A function literal such as `función(a. b) a + b`.
///
/// Runtime function values borrow this node, so it must outlive evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names, in order.
    pub parameters: Vec<String>,
    /// The body evaluated on every call.
    pub body:       Block,
    /// Where the `función` keyword was found.
    pub position:   Position,
}

/// A syntactic node.
///
/// Covers assignments, literals, identifiers, operators, conditionals, loops,
/// function literals and calls. Nodes that may fail during evaluation record
/// the source position used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `name := value`
    Assignment {
        /// The bound name.
        name:     String,
        /// The expression whose value gets bound.
        value:    Box<Self>,
        /// Position of the name.
        position: Position,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name:     String,
        /// Position in the source code.
        position: Position,
    },
    /// A signed 64-bit integer literal.
    Integer {
        /// The literal value.
        value:    i64,
        /// Position in the source code.
        position: Position,
    },
    /// `verdadero` or `falso`.
    Boolean {
        /// The literal truth value.
        value:    bool,
        /// Position in the source code.
        position: Position,
    },
    /// A binary operation.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       InfixOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Arithmetic negation, `-x`.
    Minus {
        /// The negated expression.
        operand:  Box<Self>,
        /// Position of the `-`.
        position: Position,
    },
    /// Logical negation, `no x`.
    Not {
        /// The negated expression.
        operand:  Box<Self>,
        /// Position of the `no`.
        position: Position,
    },
    /// `si condition consequence [sino alternative]`
    If {
        /// Must evaluate to a boolean.
        condition:   Box<Self>,
        /// Evaluated when the condition holds.
        consequence: Block,
        /// Evaluated otherwise, when present.
        alternative: Option<Block>,
        /// Position of the `si`.
        position:    Position,
    },
    /// `mientras condition body`
    While {
        /// Checked before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Block,
        /// Position of the `mientras`.
        position:  Position,
    },
    /// A function literal.
    Function(FunctionLiteral),
    /// A call such as `f(1. 2)`.
    FunctionCall {
        /// The name the callee is bound to.
        callee:    String,
        /// Argument expressions, evaluated in the caller's environment.
        arguments: Vec<Self>,
        /// Position of the callee name.
        position:  Position,
    },
}

impl Node {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use castellano::{ast::Node, interpreter::lexer::Position};
    ///
    /// let node = Node::Identifier { name:     "x".to_string(),
    ///                               position: Position { line: 3, column: 4 }, };
    ///
    /// assert_eq!(node.position().line, 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Function(function) => function.position,
            Self::Assignment { position, .. }
            | Self::Identifier { position, .. }
            | Self::Integer { position, .. }
            | Self::Boolean { position, .. }
            | Self::Infix { position, .. }
            | Self::Minus { position, .. }
            | Self::Not { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// Trees are as deep as their longest operator chain, so they are taken
/// apart with an explicit work list instead of one recursive drop per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl Node {
    /// Moves every child node into `pending`, leaving `self` shallow.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Assignment { value, .. } => pending.push(take_boxed(value)),
            Self::Infix { left, right, .. } => {
                pending.push(take_boxed(left));
                pending.push(take_boxed(right));
            },
            Self::Minus { operand, .. } | Self::Not { operand, .. } => {
                pending.push(take_boxed(operand));
            },
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                pending.push(take_boxed(condition));
                pending.append(&mut consequence.forms);
                if let Some(alternative) = alternative {
                    pending.append(&mut alternative.forms);
                }
            },
            Self::While { condition, body, .. } => {
                pending.push(take_boxed(condition));
                pending.append(&mut body.forms);
            },
            Self::Function(function) => pending.append(&mut function.body.forms),
            Self::FunctionCall { arguments, .. } => pending.append(arguments),
            Self::Identifier { .. } | Self::Integer { .. } | Self::Boolean { .. } => {},
        }
    }
}

fn take_boxed(node: &mut Node) -> Node {
    std::mem::replace(node,
                      Node::Boolean { value:    false,
                                      position: Position::default(), })
}

/// The operators allowed in an infix node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Equality (`=`)
    Equals,
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Multiplication,
    /// Truncating division (`/`)
    Division,
}

impl InfixOperator {
    /// Maps a token kind to its infix operator, if it is one.
    ///
    /// ```
    /// use castellano::{ast::InfixOperator, interpreter::lexer::TokenKind};
    ///
    /// assert_eq!(InfixOperator::from_token(TokenKind::Plus), Some(InfixOperator::Plus));
    /// assert_eq!(InfixOperator::from_token(TokenKind::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(Self::Equals),
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Minus),
            TokenKind::Multiplication => Some(Self::Multiplication),
            TokenKind::Division => Some(Self::Division),
            _ => None,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        };
        write!(f, "{operator}")
    }
}

/// Renders nodes back as source text, fully parenthesizing every operator.
///
/// `1 + 2 * 3 = 7` renders as `((1 + (2 * 3)) = 7)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        guarded(|| self.render(f))
    }
}

impl Node {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { name, value, .. } => write!(f, "{name} := {value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Boolean { value, .. } => {
                write!(f, "{}", if *value { "verdadero" } else { "falso" })
            },
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Minus { operand, .. } => write!(f, "(-{operand})"),
            Self::Not { operand, .. } => write!(f, "(no {operand})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "si {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " sino {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => write!(f, "mientras {condition} {body}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::FunctionCall { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for form in &self.forms {
            write!(f, " {form}.")?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "función({}) {}", self.parameters.join(". "), self.body)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, form) in self.forms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{form}.")?;
        }
        Ok(())
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ". ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}
