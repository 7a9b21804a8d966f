//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates rendering details to
//! `components`. Pure helpers a page needs (href builders, data decoding)
//! live next to it and are tested there.

pub mod home;
pub mod login;
pub mod news;
pub mod notices;
pub mod products;
pub mod profile;
pub mod signup;
