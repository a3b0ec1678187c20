//! CRM Admin Kernel Library
//!
//! Menu derivation and form validation for the admin back office.
//! The `crm-admin` binary wraps both for use from the command line.

pub mod config;
pub mod error;
pub mod forms;
pub mod menu;
pub mod validator;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{MenuNode, RouteNode, derive_menu};
pub use validator::{Validator, Verify};
