use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::{debug, trace};
use ptree::{write_tree, TreeBuilder};
use std::cmp::max;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of an expression tree. Leaves are literals, every other node is an operator with
/// exactly two operands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    LiteralInteger(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal_integer(digits: String) -> Node {
        Node::LiteralInteger(digits)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Node::BinaryOperation { .. })
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::LiteralInteger(_))
    }

    /// The token this node holds, i.e. its literal or operator.
    pub fn label(&self) -> Token {
        match self {
            Node::LiteralInteger(digits) => Token::LiteralInteger(digits.clone()),
            Node::BinaryOperation { operator, .. } => operator.token(),
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::LiteralInteger(_) => None,
            Node::BinaryOperation { left_operand, .. } => Some(left_operand.as_ref()),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::LiteralInteger(_) => None,
            Node::BinaryOperation { right_operand, .. } => Some(right_operand.as_ref()),
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(digits) => visitor.visit_literal_integer(digits),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::LiteralInteger(_) => 0,
            Node::BinaryOperation {
                left_operand,
                right_operand,
                ..
            } => 1 + max(left_operand.height(), right_operand.height()),
        }
    }
}

/// How strictly a postfix token stream is checked while a tree is built from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Validation {
    /// Any operand left over once the stream is consumed is an error.
    #[default]
    Strict,
    /// Leftover operands are discarded and the most recently built tree is returned.
    Lenient,
}

/// A binary expression tree, which may be empty.
///
/// Trees are built bottom-up and never change afterwards; each subtree is owned by its parent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    pub fn empty() -> ExpressionTree {
        ExpressionTree { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Visits the left subtree, then the right subtree, then the node itself.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder {
            stack: self.root.iter().map(|root| (root, false)).collect(),
        }
    }

    /// The labels of the tree in postorder, which is the postfix form of the expression.
    pub fn to_postfix(&self) -> Vec<Token> {
        self.postorder().map(Node::label).collect()
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.postorder().count()
    }

    /// Number of edges on the longest path from the root to a leaf, or `None` for an empty tree.
    pub fn height(&self) -> Option<usize> {
        self.root.as_ref().map(Node::height)
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        if let Some(root) = &self.root {
            root.accept(&mut visitor);
        }

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl From<Node> for ExpressionTree {
    fn from(root: Node) -> Self {
        ExpressionTree { root: Some(root) }
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// Lazy postorder traversal of an [`ExpressionTree`].
pub struct Postorder<'a> {
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Iterator for Postorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, children_visited)) = self.stack.pop() {
            match node {
                Node::BinaryOperation {
                    left_operand,
                    right_operand,
                    ..
                } if !children_visited => {
                    self.stack.push((node, true));
                    self.stack.push((right_operand.as_ref(), false));
                    self.stack.push((left_operand.as_ref(), false));
                }
                _ => return Some(node),
            }
        }
        None
    }
}

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
/// * `validation`: Whether operands left over at the end are an error or are discarded.
///
/// returns: The generated expression tree.
pub fn new_tree(postfix_tokens: Vec<Token>, validation: Validation) -> Result<ExpressionTree> {
    let mut operands: Vec<Node> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::LiteralInteger(digits) => operands.push(Node::new_literal_integer(digits)),
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::invalid(
                    "There should not be any parenthesis present in the input",
                )
                .into())
            }
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                let operator = BinaryOperator::from_token(&token)
                    .context("Should be unreachable. Every operator token has an operator.")?;
                let right_operand = pop_operand(&mut operands, "Expected a second operand")?;
                let left_operand = pop_operand(&mut operands, "Expected a first operand")?;

                operands.push(Node::new_binary_operation(
                    operator,
                    left_operand,
                    right_operand,
                ));
            }
        }
        trace!("Tree stack holds {} subtrees", operands.len());
    }

    let root = pop_operand(&mut operands, "No tree root found")?;

    if !operands.is_empty() {
        match validation {
            Validation::Strict => {
                return Err(ExpressionError::invalid(format!(
                    "{} operands are missing an operator",
                    operands.len()
                ))
                .into())
            }
            Validation::Lenient => {
                debug!("Discarding {} leftover subtrees", operands.len());
            }
        }
    }

    Ok(ExpressionTree::from(root))
}

fn pop_operand(operands: &mut Vec<Node>, message: &str) -> Result<Node> {
    operands
        .pop()
        .ok_or_else(|| ExpressionError::invalid(message).into())
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, digits: &str) {
        self.builder.add_empty_child(digits.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}
