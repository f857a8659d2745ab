//! Validation contract: predicates and enforcement over dynamic values.

pub mod value;
pub mod contract;
pub mod email;

pub use contract::*;
pub use email::{enforce_email, enforce_email_value, is_valid_email};
pub use value::Value;
