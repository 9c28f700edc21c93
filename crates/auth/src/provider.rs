//! Identity provider seam.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

use crate::user::SignedInUser;

/// Authentication state as published by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// The provider has not reported yet.
    Unknown,
    SignedOut,
    SignedIn(SignedInUser),
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Unknown)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authentication provider closed before reporting a state")]
    ProviderClosed,

    #[error("sign-out failed: {0}")]
    SignOut(String),
}

/// "Notify on authentication state change", plus sign-out.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Subscribe to state changes. The receiver starts at the current state.
    fn subscribe(&self) -> watch::Receiver<AuthState>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[async_trait]
impl<P> AuthProvider for Arc<P>
where
    P: AuthProvider + ?Sized,
{
    fn subscribe(&self) -> watch::Receiver<AuthState> {
        (**self).subscribe()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        (**self).sign_out().await
    }
}

/// Provider backed by a watch channel; used for tests and for identities
/// supplied through configuration.
#[derive(Debug)]
pub struct InMemoryAuthProvider {
    state: watch::Sender<AuthState>,
    reject_sign_out: AtomicBool,
}

impl InMemoryAuthProvider {
    pub fn new(initial: AuthState) -> Self {
        let (state, _rx) = watch::channel(initial);
        Self {
            state,
            reject_sign_out: AtomicBool::new(false),
        }
    }

    pub fn pending() -> Self {
        Self::new(AuthState::Unknown)
    }

    pub fn signed_in(user: SignedInUser) -> Self {
        Self::new(AuthState::SignedIn(user))
    }

    pub fn signed_out() -> Self {
        Self::new(AuthState::SignedOut)
    }

    pub fn publish(&self, state: AuthState) {
        self.state.send_replace(state);
    }

    /// Make subsequent `sign_out` calls fail (simulates a provider error).
    pub fn reject_sign_out(&self, reject: bool) {
        self.reject_sign_out.store(reject, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.reject_sign_out.load(Ordering::SeqCst) {
            return Err(AuthError::SignOut("provider rejected sign-out".to_string()));
        }
        self.state.send_replace(AuthState::SignedOut);
        Ok(())
    }
}
