//! # Robot Sample App Library
//!
//! This library exposes the concrete robot models and the report type of the
//! sample application for integration testing.

pub mod model;
pub mod report;
