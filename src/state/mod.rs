//! Controller-owned session state.
//!
//! DESIGN
//! ======
//! All mutable page state lives in explicit structs owned by the controller.
//! The view layer renders from an immutable snapshot of them.

pub mod loading;
pub mod selection;
pub mod session;
