//! Utility helpers shared across the controller, views, and CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clock formatting and file naming used by the views and the CLI.

pub mod files;
pub mod timefmt;
