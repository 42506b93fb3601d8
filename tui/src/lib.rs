//! bill-splitter TUI Library
//!
//! A thin terminal surface over `ledger-core`. Key presses are translated into
//! `UserEvent`s; rendering reads only the ledger's projection.
//!
//! This module exposes internal components for integration testing.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{App, FormField};
