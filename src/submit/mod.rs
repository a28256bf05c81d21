//! Submission handling for the signup form

mod handler;
mod traits;

pub use handler::{AlertSubmitHandler, DEFAULT_SUBMIT_DELAY};
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
