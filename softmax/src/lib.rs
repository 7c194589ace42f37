pub mod config;
pub mod errors;
pub mod softmax;

pub use config::{SoftmaxConfig, Stability};
pub use errors::{Result, SoftmaxError};
pub use softmax::{softmax, softmax_stable};
