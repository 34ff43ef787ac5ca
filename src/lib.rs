//! readmegen: Generate a README from a title, a few sections, a license and contact details.
//!
//! The generation engine is pure: [`section`] reconstructs heading hierarchies, [`toc`] renders
//! them as a numbered outline, [`license`] and [`questions`] template the closing sections, and
//! [`markdown`] assembles the document from a [`request::DocumentRequest`]. The remaining modules
//! collect that request interactively and write the result.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod error;
pub mod license;
pub mod markdown;
pub mod output;
pub mod questions;
pub mod request;
pub mod section;
pub mod toc;
pub mod ui;
