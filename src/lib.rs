//! # snapshot-dom
//!
//! Convert a DOM node tree into a plain, JSON-serializable record for diffing
//! and snapshot testing.
//!
//! ## Features
//!
//! - **Serializer**: total, pure projection of DOM-like nodes into [`Record`]s
//! - **Node providers**: JSON values, typed in-process [`Node`]s, or anything
//!   implementing [`DomNode`]
//! - **Post-processing**: drop empty attributes, sort attribute names and values
//! - **Browser Session**: render HTML in Chrome/Chromium and snapshot the live DOM
//!
//! ## Library Usage
//!
//! ### Serializing an in-process tree
//!
//! ```rust
//! use snapshot_dom::{Node, SerializeOptions, serialize};
//!
//! let node = Node::element("DIV")
//!     .with_attribute("id", "x")
//!     .with_child(Node::text("hi"));
//!
//! let record = serialize(Some(&node), SerializeOptions::default());
//! assert_eq!(record.tag_name.as_deref(), Some("div"));
//! assert_eq!(
//!     record.to_json_compact().unwrap(),
//!     r##"{"tagName":"div","attributes":{"id":"x"},"childNodes":[{"nodeName":"#text","nodeValue":"hi"}]}"##
//! );
//! ```
//!
//! ### Snapshotting a rendered page
//!
//! ```rust,no_run
//! use snapshot_dom::{BrowserSession, LaunchOptions, SnapshotOptions};
//!
//! # fn main() -> snapshot_dom::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//! session.set_content("<p class='b a'>Hello</p>")?;
//!
//! let options = SnapshotOptions::new().sort_attributes(["class"]);
//! let record = session.snapshot_body(&options)?;
//! println!("{}", record.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: node providers, records, the serializer and post-processing
//! - [`browser`]: browser session management and configuration
//! - [`error`]: Error types and result aliases

pub mod browser;
pub mod dom;
pub mod error;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use dom::{Attribute, DomNode, Node, Record, SerializeOptions, SnapshotOptions, serialize, snapshot};
pub use error::{Result, SnapshotError};
