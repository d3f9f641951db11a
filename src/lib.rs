//! formflow: form validation and submission protocol client, paired with a
//! static resource server.
//!
//! The core is a UI-toolkit-free capability interface: a [`FormApp`] owns a
//! [`state::FormSession`] and exposes `validate`, `get_data`, `set_data` and
//! `submit`; whatever layer owns user interaction calls these and renders
//! the session's error markers and result status. The submission protocol
//! interprets the remote tri-state response (success / progress / error) and
//! drives the server-directed retry cycle. The static resource server
//! serves the frontend assets.

pub mod app;
pub mod config;
pub mod server;
pub mod state;
pub mod submit;
pub mod validate;

pub use app::FormApp;
pub use config::FormConfig;
