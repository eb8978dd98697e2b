//! Session Controller
//!
//! Entry point for user-triggered auth flows. Each call builds the matching
//! use case, tracks the flow's state, and navigates on success.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use platform::storage::KeyValueStorage;

use crate::application::config::AuthConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::application::request_otp::{RequestOtpInput, RequestOtpUseCase};
use crate::application::session_store::SessionStore;
use crate::application::verify_otp::{VerifyOtpInput, VerifyOtpUseCase};
use crate::domain::entity::{identity::Identity, route_rule::AccessDecision, session::Session};
use crate::domain::gateway::{AuthClient, Location, Navigator};
use crate::error::AuthResult;
use crate::presentation::routes::{MenuItem, RouteTable};

/// User-triggered flow kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Login,
    Register,
    RequestOtp,
    VerifyOtp,
}

/// Per-flow progress
///
/// `Idle → Requesting → {Authenticated | AwaitingOtp | Sent | Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// Backend call in flight; the triggering control should be disabled
    Requesting,
    Authenticated,
    AwaitingOtp,
    Sent,
    Failed,
}

pub struct SessionController<C, S, N>
where
    C: AuthClient,
    S: KeyValueStorage,
    N: Navigator,
{
    client: Arc<C>,
    store: Arc<SessionStore<S>>,
    navigator: Arc<N>,
    routes: Arc<RouteTable>,
    config: Arc<AuthConfig>,
    flows: Mutex<HashMap<Flow, FlowState>>,
}

impl<C, S, N> SessionController<C, S, N>
where
    C: AuthClient,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(
        client: Arc<C>,
        store: Arc<SessionStore<S>>,
        navigator: Arc<N>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            client,
            store,
            navigator,
            routes: Arc::new(RouteTable::civic()),
            config,
            flows: Mutex::new(HashMap::new()),
        }
    }

    // ========================================================================
    // Flows
    // ========================================================================

    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Identity> {
        let use_case = LoginUseCase::new(
            Arc::clone(&self.client),
            Arc::clone(&self.store),
            Arc::clone(&self.config),
        );
        let input = LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        };

        let output = self
            .track(Flow::Login, FlowState::Authenticated, use_case.execute(input))
            .await?;
        self.navigator.navigate(output.destination);
        Ok(output.identity)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<()> {
        let use_case = RegisterUseCase::new(Arc::clone(&self.client), Arc::clone(&self.config));
        let input = RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let output = self
            .track(Flow::Register, FlowState::AwaitingOtp, use_case.execute(input))
            .await?;
        self.navigator.navigate(output.destination);
        Ok(())
    }

    /// Mail a fresh code. No session change, no navigation.
    pub async fn request_otp(&self, email: &str) -> AuthResult<()> {
        let use_case = RequestOtpUseCase::new(Arc::clone(&self.client));
        let input = RequestOtpInput {
            email: email.to_string(),
        };

        self.track(Flow::RequestOtp, FlowState::Sent, use_case.execute(input))
            .await
            .map(|_| ())
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> AuthResult<Identity> {
        let use_case = VerifyOtpUseCase::new(
            Arc::clone(&self.client),
            Arc::clone(&self.store),
            Arc::clone(&self.config),
        );
        let input = VerifyOtpInput {
            email: email.to_string(),
            otp: otp.to_string(),
        };

        let output = self
            .track(Flow::VerifyOtp, FlowState::Authenticated, use_case.execute(input))
            .await?;
        self.navigator.navigate(output.destination);
        Ok(output.identity)
    }

    /// Clear the session and go to the public home. Never fails.
    pub fn logout(&self) {
        let destination =
            LogoutUseCase::new(Arc::clone(&self.store), Arc::clone(&self.config)).execute();
        self.reset_flows();
        self.navigator.navigate(destination);
    }

    /// Attempt to open `path`, following the guard's decision
    pub fn visit(&self, path: &str) -> AccessDecision {
        let decision = self.routes.decide(&self.store.get(), path);

        let target = match decision {
            AccessDecision::Allow => path,
            AccessDecision::RedirectToLogin => self.config.login_path.as_str(),
            AccessDecision::RedirectToHome => self.config.public_home.as_str(),
        };

        if decision != AccessDecision::Allow {
            tracing::debug!(path = %path, %decision, "Route access redirected");
        }

        self.navigator.navigate(Location::to(target));
        decision
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn session(&self) -> Session {
        self.store.get()
    }

    pub fn flow_state(&self, flow: Flow) -> FlowState {
        self.flows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&flow)
            .copied()
            .unwrap_or_default()
    }

    /// Navigation menu for the current session
    pub fn menu(&self) -> &'static [MenuItem] {
        RouteTable::menu_for(self.store.get().role())
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    // ========================================================================
    // Flow tracking
    // ========================================================================

    async fn track<T, F>(&self, flow: Flow, on_success: FlowState, future: F) -> AuthResult<T>
    where
        F: Future<Output = AuthResult<T>>,
    {
        self.set_flow(flow, FlowState::Requesting);

        let result = future.await;
        match &result {
            Ok(_) => self.set_flow(flow, on_success),
            Err(e) => {
                e.log();
                self.set_flow(flow, FlowState::Failed);
            }
        }
        result
    }

    fn set_flow(&self, flow: Flow, state: FlowState) {
        self.flows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(flow, state);
    }

    fn reset_flows(&self) {
        self.flows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
