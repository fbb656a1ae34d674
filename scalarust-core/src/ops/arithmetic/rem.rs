use crate::node::Node;
use crate::ops::Operation;
use log::debug;

/// Floored remainder: the result has the sign of the divisor.
///
/// `floored_rem(-7.0, 3.0) == 2.0`, `floored_rem(7.0, -3.0) == -2.0`.
/// Division by zero yields NaN.
pub(crate) fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r == 0.0 {
        // Exact multiples: zero takes the divisor's sign.
        0.0f64.copysign(b)
    } else if (b < 0.0) != (r < 0.0) {
        r + b
    } else {
        r
    }
}

/// Computes `a mod b` with floor semantics (sign follows the divisor).
pub fn rem_op(a: &Node, b: &Node) -> Node {
    Node::from_operation(
        floored_rem(a.value(), b.value()),
        Operation::Rem,
        vec![a.clone(), b.clone()],
    )
}

/// Gradient rule for `rem`.
///
/// `a` receives the output gradient, `b` receives it scaled by
/// `-(floor(a / b) + 1)`. When `b == 0` neither operand receives anything.
pub(crate) fn rem_backward(grad: f64, a: &Node, b: &Node) {
    let (a_value, b_value) = (a.value(), b.value());
    if b_value == 0.0 {
        debug!("rem_backward: divisor is zero, skipping gradient contribution");
        return;
    }
    a.accumulate_grad(grad);
    b.accumulate_grad(grad * -((a_value / b_value).floor() + 1.0));
}
