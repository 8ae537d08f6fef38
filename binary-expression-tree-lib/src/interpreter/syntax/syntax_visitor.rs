use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _digits: &str) {}
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complex_tree() -> Node {
        let a = Node::new_literal_integer("1".into());
        let b = Node::new_literal_integer("2".into());
        let c = Node::new_literal_integer("3".into());
        let d = Node::new_literal_integer("4".into());
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, b, c);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, d);
        Node::new_binary_operation(BinaryOperator::Subtract, a, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_literal_integer(&mut self, digits: &str) {
            self.prints.push(digits.to_string())
        }
        fn visit_binary_operation(
            &mut self,
            operator: &BinaryOperator,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{:?}", operator));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {:?}", operator));
        }
    }

    struct LiteralCollector {
        literals: Vec<String>,
    }

    impl SyntaxVisitor for LiteralCollector {
        fn visit_literal_integer(&mut self, digits: &str) {
            self.literals.push(digits.to_string())
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Subtract",
                "1",
                "Multiply",
                "Add",
                "2",
                "3",
                "exit Add",
                "4",
                "exit Multiply",
                "exit Subtract",
            ]
        )
    }

    #[test]
    fn default_walk_reaches_every_leaf_left_to_right() {
        let root = create_complex_tree();
        let mut visitor = LiteralCollector { literals: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.literals, ["1", "2", "3", "4"])
    }
}
