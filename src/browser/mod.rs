//! Browser collaborator
//!
//! Renders HTML in Chrome/Chromium and feeds the live DOM to the serializer.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::{BrowserSession, DEFAULT_SELECTOR};
