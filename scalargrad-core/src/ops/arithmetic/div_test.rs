use crate::autograd::grad_check::check_grad;
use crate::error::ScalarGradError;
use crate::ops::arithmetic::div_op;
use crate::scalar::Scalar;
use crate::types::Op;
use crate::utils::testing::check_scalar_near;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let a = Scalar::new(12.0);
    let b = Scalar::new(4.0);
    assert_eq!(div_op(&a, &b).value(), 3.0);
}

#[test]
fn test_div_desugars_to_mul_of_inverse() {
    let a = Scalar::new(12.0);
    let b = Scalar::new(4.0);
    let c = div_op(&a, &b);
    assert_eq!(c.op(), Some(Op::Mul));
    let (lhs, inverse) = c.operands().unwrap();
    assert_eq!(lhs, a);
    assert_eq!(inverse.op(), Some(Op::Pow));
    let (base, exponent) = inverse.operands().unwrap();
    assert_eq!(base, b);
    assert_eq!(exponent.value(), -1.0);
}

#[test]
fn test_div_backward() {
    // c = a / b: dc/da = 1/b, dc/db = -a/b^2.
    let a = Scalar::new(12.0);
    let b = Scalar::new(4.0);
    let c = div_op(&a, &b);
    c.backward().unwrap();
    assert_relative_eq!(a.grad(), 0.25, max_relative = 1e-12);
    assert_relative_eq!(b.grad(), -0.75, max_relative = 1e-12);
}

#[test]
fn test_div_by_zero_forward_is_infinite() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(0.0);
    assert!(div_op(&a, &b).value().is_infinite());
}

#[test]
fn test_div_negative_divisor_is_a_backward_error() {
    // The inverse is a POW node, so backward needs ln(divisor).
    let a = Scalar::new(12.0);
    let b = Scalar::new(-4.0);
    let c = div_op(&a, &b);
    assert_eq!(c.value(), -3.0);
    assert_eq!(
        c.backward(),
        Err(ScalarGradError::NonPositivePowBase {
            base: -4.0,
            exponent: -1.0
        })
    );
}

#[test]
fn test_div_overload_grid() {
    let a = Scalar::new(12.0);
    let b = Scalar::new(4.0);
    check_scalar_near(&(&a / &b), 3.0, 1e-12);
    check_scalar_near(&(a.clone() / b.clone()), 3.0, 1e-12);
    check_scalar_near(&(a.clone() / &b), 3.0, 1e-12);
    check_scalar_near(&(&a / b.clone()), 3.0, 1e-12);
    check_scalar_near(&(&a / 4.0), 3.0, 1e-12);
    check_scalar_near(&(a.clone() / 4.0), 3.0, 1e-12);
    check_scalar_near(&(12.0 / &b), 3.0, 1e-12);
    check_scalar_near(&(12.0 / b.clone()), 3.0, 1e-12);
}

#[test]
fn test_div_grad_check() {
    check_grad(|xs| &xs[0] / &xs[1], &[12.0, 4.0], 1e-6, 1e-5).unwrap();
}
