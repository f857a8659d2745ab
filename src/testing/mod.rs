//! Headless testing helpers: Pilot, snapshot dumps.
//!
//! Use [`headless_form`] or the [`Pilot`] to build forms without a display,
//! and [`form_to_string`] to capture what they show as plain text for
//! snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{headless_form, Pilot};
pub use snapshot::{describe, form_to_string};
