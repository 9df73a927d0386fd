//! UI layer: components, theme, viewport, and the runtime event loop.

pub mod components;
pub mod runtime;
pub mod theme;
pub mod viewport;
