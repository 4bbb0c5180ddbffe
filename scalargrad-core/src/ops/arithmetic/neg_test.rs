use crate::ops::arithmetic::neg_op;
use crate::scalar::Scalar;
use crate::types::Op;

#[test]
fn test_neg_forward() {
    let a = Scalar::new(3.0);
    assert_eq!(neg_op(&a).value(), -3.0);
    assert_eq!((-&a).value(), -3.0);
    assert_eq!((-a).value(), -3.0);
}

#[test]
fn test_neg_desugars_to_mul_by_minus_one() {
    let a = Scalar::new(3.0);
    let n = neg_op(&a);
    assert_eq!(n.op(), Some(Op::Mul));
    let (lhs, rhs) = n.operands().unwrap();
    assert!(lhs.is_leaf());
    assert_eq!(lhs.value(), -1.0);
    assert_eq!(rhs, a);
}

#[test]
fn test_neg_backward() {
    let a = Scalar::new(3.0);
    let n = -&a;
    n.backward().unwrap();
    assert_eq!(a.grad(), -1.0);
}
