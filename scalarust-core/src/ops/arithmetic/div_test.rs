use super::*;
use crate::autograd::{backpropagate, traverse};
use crate::utils::testing::{check_value_near, leaf};

#[test]
fn test_div_forward() {
    let a = leaf(5.4);
    let b = leaf(2.5);
    let c = div_op(&a, &b);
    check_value_near(c.value(), 2.16, 1e-12);
    assert_eq!(c.operation(), Some(Operation::Mul));
    assert_eq!(c.operands()[1].operation(), Some(Operation::Pow));
}

#[test]
fn test_div_backward() {
    let a = leaf(6.0);
    let b = leaf(3.0);
    let c = &a / &b;
    backpropagate(&traverse(&c)).unwrap();
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    check_value_near(a.grad(), 1.0 / 3.0, 1e-12);
    check_value_near(b.grad(), -6.0 / 9.0, 1e-12);
}

#[test]
fn test_div_by_zero_is_infinite() {
    let a = leaf(1.0);
    let b = leaf(0.0);
    let c = div_op(&a, &b);
    assert!(c.value().is_infinite());
}

#[test]
fn test_floor_div_floors_value_only() {
    let a = leaf(7.0);
    let b = leaf(2.0);
    let c = a.floor_div(&b);
    assert_eq!(c.value(), 3.0);
    assert_eq!(c.operation(), Some(Operation::Mul));

    backpropagate(&traverse(&c)).unwrap();
    // Gradients are those of the un-floored quotient 7/2.
    check_value_near(a.grad(), 0.5, 1e-12);
    check_value_near(b.grad(), -7.0 / 4.0, 1e-12);
}

#[test]
fn test_floor_div_negative_rounds_down() {
    let a = leaf(-7.0);
    let b = leaf(2.0);
    assert_eq!(floor_div_op(&a, &b).value(), -4.0);
}
