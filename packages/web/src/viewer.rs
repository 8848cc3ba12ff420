//! Viewer session state, provided to the whole component tree.

use dioxus::prelude::*;

use crate::graphql::{browser_client, ClientError, LOG_IN, LOG_OUT};
use crate::session;
use crate::types::{LogInInput, LogInResponse, LogOutResponse, Viewer};

/// Viewer context that provides session state to the entire app
#[derive(Clone, Copy)]
pub struct ViewerContext {
    /// Current viewer record
    pub viewer: Signal<Viewer>,
    /// Failure of the one-time login check, if any
    pub error: Signal<Option<String>>,
}

impl ViewerContext {
    /// Check if the viewer is signed in
    pub fn is_signed_in(&self) -> bool {
        self.viewer.read().id.is_some()
    }

    /// Check if the viewer has connected a Stripe wallet
    pub fn has_wallet(&self) -> bool {
        self.viewer.read().has_wallet.unwrap_or(false)
    }

    /// Replace the viewer wholesale and sync the stored credential.
    ///
    /// A payload with a token persists it; a payload without one clears
    /// the slot, so a signed-out viewer never leaves a stale credential.
    pub fn apply(mut self, viewer: Viewer) {
        match viewer.token.as_deref() {
            Some(token) => session::set_token(token),
            None => session::remove_token(),
        }
        self.viewer.set(viewer);
    }

    /// Issue the `logIn` mutation.
    ///
    /// Called with no input by the bootstrap check (cookie-based
    /// re-authentication) and with an OAuth `code` by the login page.
    pub async fn log_in(self, input: Option<LogInInput>) -> Result<(), ClientError> {
        #[derive(serde::Serialize)]
        struct Variables {
            input: Option<LogInInput>,
        }

        let response: LogInResponse = browser_client()
            .mutate(LOG_IN, Some(Variables { input }))
            .await?;
        self.apply(response.log_in);
        Ok(())
    }

    /// Issue the `logOut` mutation and reset the viewer.
    pub async fn log_out(self) {
        match browser_client().mutate::<(), LogOutResponse>(LOG_OUT, None).await {
            Ok(response) => self.apply(response.log_out),
            Err(err) => tracing::warn!("log out failed: {err}"),
        }
    }
}

/// Provider component that wraps the app.
///
/// Mounts once per page load and issues the login check exactly once;
/// re-renders of the subtree do not re-run the effect.
#[component]
pub fn ViewerProvider(children: Element) -> Element {
    let viewer = use_signal(Viewer::default);
    let error = use_signal(|| None::<String>);

    let ctx = ViewerContext { viewer, error };
    use_context_provider(|| ctx);

    use_effect(move || {
        spawn(async move {
            if let Err(err) = ctx.log_in(None).await {
                tracing::warn!("login verification failed: {err}");
                let mut ctx = ctx;
                ctx.error.set(Some(err.to_string()));
            }
        });
    });

    children
}

/// Hook to access the viewer context
pub fn use_viewer() -> ViewerContext {
    use_context::<ViewerContext>()
}
