//! # appgenie
//!
//! Form and component framework behind the Appointment Genie scheduling app,
//! plus the screens, entities and persistence built on it.
//!
//! A [`Form`](form::Form) is a titled window with a full-bleed content
//! container. Screens create components through its widget factory, find them
//! again by name through the component registry, and restyle them through the
//! font configurator. Every input is checked by the validation contract before
//! anything changes, and every change is pushed to the form's
//! [`Surface`](surface::Surface) before the call returns.
//!
//! ## Core Systems
//!
//! - **[`validate`]** — Validation contract: dynamic values, predicates, enforcement
//! - **[`registry`]** — Ordered name → widget registry, first match wins
//! - **[`form`]** — Geometry manager, widget factory, font configurator, focus, events
//! - **[`widget`]** / **[`widgets`]** — Slotmap widget arena and the widget variants
//! - **[`style`]** — Font descriptors, positional style flags, family whitelist
//! - **[`surface`]** — Window backend trait, taffy placement, headless surface
//! - **[`screens`]** — Login, Add Contact and Create Booking
//! - **[`model`]** / **[`auth`]** / **[`db`]** — Users, contacts, bookings, hashing, SQLite
//! - **[`controller`]** — Routes screen submissions to the model and database
//! - **[`geometry`]** — Offset, Size, Region primitives

// Foundation
pub mod error;
pub mod geometry;
pub mod validate;

// Widget system
pub mod style;
pub mod widget;
pub mod widgets;

// Forms
pub mod clock;
pub mod config;
pub mod form;
pub mod registry;
pub mod surface;

// Application
pub mod auth;
pub mod controller;
pub mod db;
pub mod model;
pub mod screens;

pub mod testing;

pub use error::{ErrorKind, FormError, Result};
