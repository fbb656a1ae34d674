use super::*;
use crate::utils::testing::check_value_near;

#[test]
fn test_leaf_construction() {
    let a = Node::new(3.5);
    assert_eq!(a.value(), 3.5);
    assert_eq!(a.grad(), 0.0);
    assert!(a.is_leaf());
    assert!(a.operation().is_none());
    assert!(a.operands().is_empty());
}

#[test]
fn test_from_conversions() {
    assert_eq!(Node::from(2.5f64).value(), 2.5);
    assert_eq!(Node::from(0.5f32).value(), 0.5);
    assert_eq!(Node::from(-1).value(), -1.0);
}

#[test]
fn test_try_from_operation_validates_arity() {
    let a = Node::new(1.0);
    let b = Node::new(2.0);

    let ok = Node::try_from_operation(3.0, Operation::Add, vec![a.clone(), b.clone()]).unwrap();
    assert_eq!(ok.value(), 3.0);
    assert_eq!(ok.operation(), Some(Operation::Add));

    let err = Node::try_from_operation(1.0, Operation::Relu, vec![a, b]).unwrap_err();
    assert_eq!(
        err,
        ScalarustError::ArityMismatch {
            operation: Operation::Relu,
            expected: 1,
            actual: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "Operation 'relu' expects 1 operand(s), got 2"
    );
}

#[test]
fn test_grad_accumulates_and_resets() {
    let a = Node::new(1.0);
    a.accumulate_grad(0.5);
    a.accumulate_grad(1.25);
    assert_eq!(a.grad(), 1.75);
    a.set_grad(-3.0);
    assert_eq!(a.grad(), -3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_clone_shares_identity_and_grad() {
    let a = Node::new(4.0);
    let alias = a.clone();
    assert!(a.ptr_eq(&alias));
    assert_eq!(a.id(), alias.id());
    alias.accumulate_grad(2.0);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let a = Node::new(1.0);
    let b = Node::new(1.0);
    assert!(!a.ptr_eq(&b));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_display_and_debug() {
    let a = Node::new(3.1);
    let b = Node::new(6.2);
    let s = &a + &b;
    assert_eq!(a.to_string(), "Node(3.1, operands=0)");
    assert!(s.to_string().ends_with("operands=2)"));
    let debug = format!("{:?}", s);
    assert!(debug.contains("operation: Some(Add)"));
    assert!(debug.contains("operands: 2"));
}

#[test]
fn test_operator_overloads_record_graph() {
    let a = Node::new(6.0);
    let b = Node::new(4.0);

    assert_eq!((&a + &b).value(), 10.0);
    assert_eq!((&a - &b).value(), 2.0);
    assert_eq!((&a * &b).value(), 24.0);
    check_value_near((&a / &b).value(), 1.5, 1e-12);
    assert_eq!((&a % &b).value(), 2.0);
    assert_eq!((-&a).value(), -6.0);

    // Mixed scalar forms
    assert_eq!((&a + 1.0).value(), 7.0);
    assert_eq!((2.0 * &b).value(), 8.0);
    assert_eq!((10.0 - &a).value(), 4.0);

    // Owned forms
    assert_eq!((a.clone() * b.clone()).value(), 24.0);
    assert_eq!((-(a.clone())).value(), -6.0);
}

#[test]
fn test_sum_of_nodes() {
    let xs: Vec<Node> = [1.0, 2.0, 3.5].iter().map(|&v| Node::new(v)).collect();
    let total: Node = xs.iter().sum();
    assert_eq!(total.value(), 6.5);

    total.backward().unwrap();
    assert!(xs.iter().all(|x| x.grad() == 1.0));

    let empty: Node = Vec::<Node>::new().into_iter().sum();
    assert_eq!(empty.value(), 0.0);
    assert!(empty.is_leaf());
}

#[test]
fn test_backward_method_matches_driver() {
    let x = Node::new(2.0);
    let y = Node::new(-3.0);
    let z = &(&x * &y) + &x;
    z.backward().unwrap();
    assert_eq!(x.grad(), -2.0);
    assert_eq!(y.grad(), 2.0);
    assert_eq!(z.topological_order().len(), 4);
}

#[test]
fn test_drop_deep_chain() {
    let mut acc = Node::new(0.0);
    for _ in 0..200_000 {
        acc = &acc + 1.0;
    }
    assert_eq!(acc.value(), 200_000.0);
    drop(acc);
}

#[test]
fn test_node_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Node>();
}
