//! Form-field validation.
//!
//! A [`Validator`] is created per submission, fed with rule calls, and then
//! inspected with [`Validator::is_valid`] and [`Validator::error_by`].
//! Failures are data (field → message); nothing here returns `Err`.

mod patterns;
mod rules;
mod verify;

pub use patterns::{EMAIL_RX, PHONE_RX};
pub use rules::{ValidationError, Validator};
pub use verify::Verify;
