// src/node/operators.rs
//
// Operator overloading for `Node`. Every operator forwards to the matching
// `ops` function, so `&a + &b` records exactly the same graph as `add_op(&a, &b)`.
// Mixed forms (`&a * 2.0`, `2.0 * &a`) wrap the scalar in a fresh leaf first.

use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, rem_op, sub_op};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> $trait<&'b Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, &rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, &Node::new(rhs))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(&self, &Node::new(rhs))
            }
        }

        impl<'b> $trait<&'b Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                $op_fn(&Node::new(self), rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&Node::new(self), &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);
impl_binary_operator!(Rem, rem, rem_op);

impl<'a> Neg for &'a Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(&self)
    }
}
