//! UI components: the page view and its section line builders.

pub mod closing;
pub mod component;
pub mod counters_section;
pub mod hero;
pub mod page_view;
pub mod workflow_section;

pub use component::Component;
pub use page_view::{PageView, page_layout};
