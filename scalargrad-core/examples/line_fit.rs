//! Fits y = w * x + b to noisy synthetic samples by gradient descent.
//!
//! The graph is rebuilt every step: leaves are immutable, so the parameters
//! live as plain `f64` between iterations and are re-promoted to leaves each
//! time the loss is built.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use scalargrad_core::{Scalar, ScalarGradError};

const TRUE_W: f64 = 2.0;
const TRUE_B: f64 = -3.5;
const NUM_SAMPLES: usize = 64;
const LEARNING_RATE: f64 = 0.01;
const EPOCHS: usize = 500;

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, 0.1).expect("valid normal distribution");

    // Synthetic data: y = TRUE_W * x + TRUE_B + noise
    let samples: Vec<(f64, f64)> = (0..NUM_SAMPLES)
        .map(|_| {
            let x: f64 = rng.gen_range(-2.0..2.0);
            (x, TRUE_W * x + TRUE_B + noise.sample(&mut rng))
        })
        .collect();

    let mut w = 0.0;
    let mut b = 0.0;

    for epoch in 0..EPOCHS {
        let w_leaf = Scalar::new(w);
        let b_leaf = Scalar::new(b);

        // Mean squared error over the batch. Residuals change sign, so the
        // square is built with MUL (POW's backward needs a positive base).
        let loss: Scalar = samples
            .iter()
            .map(|&(x, y)| {
                let residual = &w_leaf * x + &b_leaf - y;
                &residual * &residual
            })
            .sum();
        let loss = loss / NUM_SAMPLES as f64;

        loss.backward()?;
        w -= LEARNING_RATE * w_leaf.grad();
        b -= LEARNING_RATE * b_leaf.grad();

        if epoch % 50 == 0 {
            println!("epoch {epoch:4}: loss = {:.6}, w = {w:.4}, b = {b:.4}", loss.value());
        }
    }

    println!("fitted:  w = {w:.4}, b = {b:.4}");
    println!("target:  w = {TRUE_W:.4}, b = {TRUE_B:.4}");
    Ok(())
}
