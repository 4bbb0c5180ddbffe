// Core modules of the crate
pub mod autograd;
pub mod error;
pub mod ops;
pub mod scalar;
pub mod scalar_data;
pub mod types;
pub mod utils;

// Re-export the main types so they are accessible directly via `scalargrad_core::Scalar`
pub use error::ScalarGradError;
pub use scalar::Scalar;
pub use types::Op;

// Re-export traits required by public functions/structs
pub use num_traits;
