//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls. Site-wide state comes
//! from the `RwSignal<UiState>` context; page state is passed in as a signal.

pub mod agreement_list;
pub mod field_row;
pub mod main_carousel;
pub mod notice_stack;
pub mod readonly_field;
pub mod saved_modal;
pub mod service_modal;
pub mod site_nav;
pub mod step_chrome;
