//! HrBuddie - a terminal shell for an HR administration dashboard
//!
//! A collapsible sidebar, a breadcrumb header and routed pages, built on a
//! small set of overlay primitives (disclosure, menu, panel, tooltip).
//! The library exposes every module for integration tests and benches.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod overlay;
pub mod terminal;
pub mod theme;
pub mod ui;
