//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is server-rendered and submits through ordinary form posts, so
//! the only HTTP the client performs itself is the username availability
//! lookup and the news refresh trigger in `api`.

pub mod api;
