//! LinkedIn OAuth Connect Flow
//!
//! Serves the two screens of the authorization-code flow:
//! - `/` renders a connect link pointing at LinkedIn's authorization endpoint
//! - `/linkedin/callback` consumes the redirect and exchanges the code
//!   through the backend for profile data

mod exchange;
mod flow;
mod router;
mod templates;
mod types;

pub use router::create_router;
