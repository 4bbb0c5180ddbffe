use crate::autograd::grad_check::check_grad;
use crate::ops::arithmetic::add_op;
use crate::scalar::Scalar;
use crate::types::Op;
use crate::utils::testing::check_scalar_near;

#[test]
fn test_add_forward() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), 5.0);
    assert_eq!(c.op(), Some(Op::Add));
    let (lhs, rhs) = c.operands().unwrap();
    assert_eq!(lhs, a);
    assert_eq!(rhs, b);
}

#[test]
fn test_add_does_not_mutate_operands() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let _ = add_op(&a, &b);
    assert_eq!(a.value(), 2.0);
    assert_eq!(b.value(), 3.0);
    assert!(a.is_leaf());
    assert!(b.is_leaf());
}

#[test]
fn test_add_backward_distributes_grad() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let c = add_op(&a, &b);
    c.backward().unwrap();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn test_add_overload_grid() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    check_scalar_near(&(&a + &b), 5.0, 1e-12);
    check_scalar_near(&(a.clone() + b.clone()), 5.0, 1e-12);
    check_scalar_near(&(a.clone() + &b), 5.0, 1e-12);
    check_scalar_near(&(&a + b.clone()), 5.0, 1e-12);
    check_scalar_near(&(&a + 3.0), 5.0, 1e-12);
    check_scalar_near(&(a.clone() + 3.0), 5.0, 1e-12);
    check_scalar_near(&(2.0 + &b), 5.0, 1e-12);
    check_scalar_near(&(2.0 + b.clone()), 5.0, 1e-12);
}

#[test]
fn test_add_scalar_promotion_builds_leaf_operand() {
    let a = Scalar::new(2.0);
    let c = &a + 3.0;
    let (_, rhs) = c.operands().unwrap();
    assert!(rhs.is_leaf());
    assert_eq!(rhs.value(), 3.0);
}

#[test]
fn test_add_grad_check() {
    check_grad(|xs| &xs[0] + &xs[1], &[2.0, 3.0], 1e-6, 1e-6).unwrap();
}
