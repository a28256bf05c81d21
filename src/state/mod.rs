//! Application state module

mod forms;
mod validation;
mod values;

pub use forms::*;
pub use validation::*;
pub use values::*;
