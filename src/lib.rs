//! Client and controller for an image-augmentation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns tasks, augmentation algorithms, and output archives. This
//! crate is the presentation side: a [`controller::Controller`] runs the user
//! flows (upload, preview, apply, re-augment, history, delete, download)
//! against an [`net::api::AugmentApi`], keeps the session state, and renders
//! it into a declarative [`view::PageView`].

pub mod config;
pub mod controller;
pub mod messages;
pub mod net;
pub mod state;
pub mod util;
pub mod view;
