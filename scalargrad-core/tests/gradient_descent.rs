// A multi-step optimize/reset loop: the typical consumer workflow the engine
// exists for. Graphs are append-only and leaves are immutable, so parameters
// live as plain f64 between steps and the graph is rebuilt each iteration.

mod common;

use common::assert_near;
use scalargrad_core::Scalar;

#[test]
fn minimizes_a_quadratic_by_gradient_descent() {
    // f(x) = (x - 3)^2, minimum at x = 3. Squared via MUL, not POW: the
    // residual goes negative, and POW's backward rule needs a positive base.
    let mut x = 0.0;
    let lr = 0.1;
    for _ in 0..100 {
        let leaf = Scalar::new(x);
        let residual = &leaf - 3.0;
        let loss = &residual * &residual;
        loss.backward().unwrap();
        x -= lr * leaf.grad();
    }
    assert_near(x, 3.0, 1e-6);
}

#[test]
fn squared_error_with_negative_residual_backpropagates() {
    // At x = 0 the residual is -3; MUL squaring has no domain restriction,
    // unlike powf(2.0), whose backward rule would reject the negative base.
    let leaf = Scalar::new(0.0);
    let residual = &leaf - 3.0;
    let loss = &residual * &residual;
    assert_near(loss.value(), 9.0, 1e-12);
    loss.backward().unwrap();
    assert_near(leaf.grad(), -6.0, 1e-12); // d(x-3)^2/dx = 2(x-3)
}

#[test]
fn fits_two_parameters_to_linear_data() {
    // Fit y = w * x + b to exact samples of y = 2x + 1 by minimizing the
    // summed squared error.
    let samples: Vec<(f64, f64)> = (0..8).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();

    let mut w = 0.0;
    let mut b = 0.0;
    let lr = 0.005;
    for _ in 0..2000 {
        let w_leaf = Scalar::new(w);
        let b_leaf = Scalar::new(b);
        let loss: Scalar = samples
            .iter()
            .map(|&(x, y)| {
                let residual = &w_leaf * x + &b_leaf - y;
                &residual * &residual
            })
            .sum();
        loss.backward().unwrap();
        w -= lr * w_leaf.grad();
        b -= lr * b_leaf.grad();
    }
    assert_near(w, 2.0, 1e-3);
    assert_near(b, 1.0, 1e-3);
}

#[test]
fn reusing_one_graph_across_steps_requires_zero_grad() {
    // Same graph differentiated twice: without the reset, step two would see
    // doubled gradients.
    let x = Scalar::new(10.0);
    let loss = (&x - 3.0).powf(2.0);

    loss.backward().unwrap();
    let g1 = x.grad();
    assert_near(g1, 14.0, 1e-9);

    loss.zero_grad();
    loss.backward().unwrap();
    assert_eq!(x.grad(), g1);
}
