//! Browser-independent state machines for the codedoc web client.
//!
//! Every piece of client behavior that has rules worth testing lives here as
//! plain Rust: the signup step wizard and its validation table, the username
//! availability gate, and the smaller page widgets (carousel, list filters,
//! navigation dropdown, login form, profile editor, tooltips, notices). The
//! `client` crate binds these to the DOM through Leptos signals and owns
//! nothing but wiring.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`wizard`] | [`wizard::StepWizard`]: current step, navigation, submission |
//! | [`step`] | Step enum, header table, and [`step::WizardView`] |
//! | [`form`] | Field identifiers and the [`form::FormSnapshot`] read model |
//! | [`validate`] | Per-step rules producing a [`validate::ValidationResult`] |
//! | [`rules`] | [`rules::RuleConfig`] optionality flags loaded from JSON |
//! | [`errors`] | Inline field errors and aggregated step errors |
//! | [`availability`] | Username availability collaborator and gate |
//! | [`checkbox`] | "Select all" checkbox group |
//! | [`carousel`] | Main slide carousel and clamped product slider |
//! | [`query`] | List filter state synced to URL query parameters |
//! | [`search`] | Client-side title and product filtering |
//! | [`menu`] | Navigation mega dropdown with delayed close |
//! | [`login`] | Login form blur checks, password toggle, submit loading |
//! | [`profile`] | Profile edit form change tracking and the saved dialog |
//! | [`tooltip`] | Hover tooltip with a tokened dismiss timer |
//! | [`notice`] | Transient floating notifications |
//! | [`consts`] | Shared limits, delays, and the common password list |

pub mod availability;
pub mod carousel;
pub mod checkbox;
pub mod consts;
pub mod errors;
pub mod form;
pub mod login;
pub mod menu;
pub mod notice;
pub mod profile;
pub mod query;
pub mod rules;
pub mod search;
pub mod step;
pub mod tooltip;
pub mod validate;
pub mod wizard;
