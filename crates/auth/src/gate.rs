//! The gate: initialize the inventory only for a signed-in user.

use tokio::sync::watch;

use crate::provider::{AuthError, AuthProvider, AuthState};
use crate::user::{SessionHeader, SignedInUser};

/// Page unauthenticated visitors are sent to.
pub const DEFAULT_ENTRY_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
}

#[derive(Debug)]
pub enum GateOutcome<T> {
    Admitted(Session<T>),
    Redirect(Redirect),
}

impl<T> GateOutcome<T> {
    pub fn into_session(self) -> Option<Session<T>> {
        match self {
            GateOutcome::Admitted(session) => Some(session),
            GateOutcome::Redirect(_) => None,
        }
    }
}

/// An admitted session: the user plus whatever the initializer built.
#[derive(Debug)]
pub struct Session<T> {
    user: SignedInUser,
    app: T,
    updates: watch::Receiver<AuthState>,
    entry_page: String,
}

impl<T> Session<T> {
    pub fn user(&self) -> &SignedInUser {
        &self.user
    }

    pub fn header(&self) -> SessionHeader {
        self.user.header()
    }

    pub fn app(&self) -> &T {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut T {
        &mut self.app
    }

    pub fn into_app(self) -> T {
        self.app
    }

    /// Resolves once the provider reports "no user" (or goes away).
    pub async fn wait_for_sign_out(&mut self) -> Redirect {
        if self
            .updates
            .wait_for(|state| matches!(state, AuthState::SignedOut))
            .await
            .is_err()
        {
            tracing::warn!("authentication provider closed; ending session");
        }
        Redirect {
            to: self.entry_page.clone(),
        }
    }
}

#[derive(Debug)]
pub struct AuthGate<P> {
    provider: P,
    entry_page: String,
}

impl<P: AuthProvider> AuthGate<P> {
    pub fn new(provider: P) -> Self {
        Self::with_entry_page(provider, DEFAULT_ENTRY_PAGE)
    }

    pub fn with_entry_page(provider: P, entry_page: impl Into<String>) -> Self {
        Self {
            provider,
            entry_page: entry_page.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn redirect(&self) -> Redirect {
        Redirect {
            to: self.entry_page.clone(),
        }
    }

    /// Wait for the first resolved auth state.
    ///
    /// Signed in: `init` runs exactly once with the user and the session is
    /// returned. No user: `init` never runs and the caller is redirected.
    pub async fn admit<T, F>(&self, init: F) -> Result<GateOutcome<T>, AuthError>
    where
        F: FnOnce(&SignedInUser) -> T,
    {
        let mut updates = self.provider.subscribe();
        let state = updates
            .wait_for(AuthState::is_resolved)
            .await
            .map_err(|_| AuthError::ProviderClosed)?
            .clone();

        match state {
            AuthState::SignedIn(user) => {
                tracing::info!(email = user.email.as_deref().unwrap_or(""), "session validated");
                let app = init(&user);
                Ok(GateOutcome::Admitted(Session {
                    user,
                    app,
                    updates,
                    entry_page: self.entry_page.clone(),
                }))
            }
            AuthState::SignedOut | AuthState::Unknown => {
                tracing::info!(to = %self.entry_page, "no signed-in user; redirecting");
                Ok(GateOutcome::Redirect(self.redirect()))
            }
        }
    }

    /// Sign out through the provider, then redirect.
    ///
    /// On failure the error is logged and returned; no redirect happens.
    pub async fn sign_out(&self) -> Result<Redirect, AuthError> {
        match self.provider.sign_out().await {
            Ok(()) => Ok(self.redirect()),
            Err(error) => {
                tracing::error!(%error, "sign-out failed");
                Err(error)
            }
        }
    }
}
