//! Host-environment helpers for the Marquee player.
//!
//! This crate owns the small amount of I/O the player needs: locating and
//! parsing the declarative page document, and answering environment queries
//! such as the reduced-motion preference. Everything else in the workspace
//! stays pure or terminal-bound.

pub mod motion;
pub mod page_store;

pub use motion::reduced_motion_requested;
pub use page_store::{PageStoreError, default_page_path, embedded_default_page, load_page};
