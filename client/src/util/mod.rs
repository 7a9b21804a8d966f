//! Browser access shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, `document`, or cookies lives here behind
//! the `csr` feature so pages and state stay testable natively.

pub mod host;
pub mod location;
pub mod page_data;
