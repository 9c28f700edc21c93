//! `stockroom-auth`: authentication gate in front of the inventory.
//!
//! The identity provider is opaque: it only publishes "signed in as X" or
//! "no user". The gate turns that into either an initialized session or a
//! redirect to the entry page. User identity is used for display only.

pub mod gate;
pub mod provider;
pub mod user;

pub use gate::{AuthGate, DEFAULT_ENTRY_PAGE, GateOutcome, Redirect, Session};
pub use provider::{AuthError, AuthProvider, AuthState, InMemoryAuthProvider};
pub use user::{PHOTO_PLACEHOLDER, SessionHeader, SignedInUser};
