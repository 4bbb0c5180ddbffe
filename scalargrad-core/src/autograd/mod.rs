pub mod grad_check;
pub mod graph;
pub mod rules;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_order;
pub use rules::local_grads;
