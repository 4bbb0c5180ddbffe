//! Builds a small expression, prints the depth-limited graph view, then runs
//! the backward pass and reports every node's gradient.

use scalargrad_core::autograd::topological_order;
use scalargrad_core::{Scalar, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);

    // y = (a * b + a)^2 / b
    let s = &a * &b + &a;
    let y = s.powf(2.0) / &b;

    println!("full view:      {}", y.display_graph(8));
    println!("truncated view: {}", y.display_graph(1));

    y.backward()?;

    println!("\nvalue and gradient per node (topological order):");
    for node in topological_order(&y) {
        let tag = node.op().map_or("leaf", |op| op.symbol());
        println!(
            "  [{:>4}] value = {:>10.4}, grad = {:>10.4}",
            tag,
            node.value(),
            node.grad()
        );
    }

    println!("\nd(y)/d(a) = {:.4}", a.grad());
    println!("d(y)/d(b) = {:.4}", b.grad());
    Ok(())
}
