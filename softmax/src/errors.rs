use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoftmaxError {
    #[error("Softmax Error: input must contain at least one value")]
    EmptyInput,

    #[error("Softmax Error: value {value} at index {index} is not finite")]
    NonFiniteInput { index: usize, value: f64 },

    /// The sum of exponentials overflowed to infinity or underflowed to zero.
    #[error("Softmax Error: sum of exponentials is {total}, outputs would not be a distribution")]
    DegenerateNormalizer { total: f64 },
}

pub type Result<T> = std::result::Result<T, SoftmaxError>;
