//! Browser-side authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this crate) stores a bearer token and the user's
//! email in local storage. This module reads them back to pick logged-in or
//! logged-out navigation, inspects the token expiry locally, and clears
//! both entries on logout. The request client in [`crate::net`] shares the
//! same [`AuthSession`].

pub mod controls;
pub mod session;
pub mod token;

pub use controls::{bind_logout_button, check_auth_state};
pub use session::{AuthSession, AuthSettings};
pub use token::{TokenClaims, TokenError, decode_claims};
