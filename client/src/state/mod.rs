//! Page-scoped reactive state.
//!
//! DESIGN
//! ======
//! Each struct here is plain data held in an `RwSignal` by its page (or by
//! `App` for site-wide chrome). The rules live in the `widgets` crate; these
//! wrappers only pair them with the values the page has collected so far.

pub mod signup;
pub mod ui;
