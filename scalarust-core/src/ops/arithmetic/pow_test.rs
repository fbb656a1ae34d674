use super::*;
use crate::autograd::{backpropagate, traverse};
use crate::utils::testing::{check_value_near, leaf};

#[test]
fn test_pow_forward() {
    let base = leaf(2.0);
    let exponent = leaf(3.0);
    let y = pow_op(&base, &exponent);
    assert_eq!(y.value(), 8.0);
    assert_eq!(y.operation(), Some(Operation::Pow));
}

#[test]
fn test_pow_backward() {
    let base = leaf(2.0);
    let exponent = leaf(3.0);
    let y = pow_op(&base, &exponent);
    backpropagate(&traverse(&y)).unwrap();
    check_value_near(base.grad(), 12.0, 1e-12);
    check_value_near(exponent.grad(), 8.0 * 2.0f64.ln(), 1e-12);
}

#[test]
fn test_pow_negative_exponent_is_reciprocal() {
    let base = leaf(4.0);
    let y = base.powf(-1.0);
    assert_eq!(y.value(), 0.25);
    backpropagate(&traverse(&y)).unwrap();
    // d(1/x)/dx = -1/x^2
    check_value_near(base.grad(), -1.0 / 16.0, 1e-12);
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let base = leaf(-8.0);
    let exponent = leaf(1.0 / 3.0);
    let y = pow_op(&base, &exponent);
    assert!(y.value().is_nan());
    // The backward pass still runs; NaN simply propagates.
    backpropagate(&traverse(&y)).unwrap();
    assert!(base.grad().is_nan());
    assert!(exponent.grad().is_nan());
}

#[test]
fn test_pow_negative_base_integer_exponent() {
    let base = leaf(-2.0);
    let exponent = leaf(2.0);
    let y = base.pow(&exponent);
    assert_eq!(y.value(), 4.0);
    backpropagate(&traverse(&y)).unwrap();
    check_value_near(base.grad(), -4.0, 1e-12);
    // ln(-2) is NaN
    assert!(exponent.grad().is_nan());
}
