pub mod error;
pub mod logging;
pub mod money;
pub mod validation;

pub use error::{AppError, Result};
pub use logging::init_tracing;
pub use money::{ensure_non_negative, round_to_unit};
pub use validation::is_digits;
