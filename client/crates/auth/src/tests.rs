//! Unit tests for Auth crate
//! End-to-end flows through the controller with the mock backend

#[cfg(test)]
mod harness {
    use std::sync::Arc;

    use platform::storage::MemoryStorage;

    use crate::application::config::AuthConfig;
    use crate::application::controller::SessionController;
    use crate::application::session_store::SessionStore;
    use crate::infra::mock::{MockAuthClient, MockConfig};
    use crate::presentation::navigation::HistoryNavigator;

    pub type Controller = SessionController<MockAuthClient, Arc<MemoryStorage>, HistoryNavigator>;

    pub struct Harness {
        pub controller: Controller,
        pub storage: Arc<MemoryStorage>,
        pub store: Arc<SessionStore<Arc<MemoryStorage>>>,
        pub navigator: Arc<HistoryNavigator>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_mock(MockConfig::default())
        }

        pub fn with_mock(mock: MockConfig) -> Self {
            Self::with_storage(Arc::new(MemoryStorage::new()), mock)
        }

        pub fn with_storage(storage: Arc<MemoryStorage>, mock: MockConfig) -> Self {
            let config = Arc::new(AuthConfig::default());
            let store = Arc::new(SessionStore::open(Arc::clone(&storage), Arc::clone(&config)));
            let navigator = Arc::new(HistoryNavigator::new());
            let controller = SessionController::new(
                Arc::new(MockAuthClient::new(mock)),
                Arc::clone(&store),
                Arc::clone(&navigator),
                config,
            );
            Self {
                controller,
                storage,
                store,
                navigator,
            }
        }

        pub fn landed_on(&self) -> Option<String> {
            self.navigator.current().map(|location| location.path)
        }
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::harness::Harness;
    use crate::domain::entity::route_rule::AccessDecision;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::role::Role;
    use crate::error::AuthError;
    use platform::storage::KeyValueStorage;

    #[tokio::test]
    async fn test_admin_login() {
        let h = Harness::new();

        let identity = h.controller.login("admin@gmail.com", "admin").await.unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(h.controller.session().identity(), Some(&identity));
        assert_eq!(h.landed_on().as_deref(), Some("/admin/dashboard"));

        let routes = h.controller.routes();
        let session = h.controller.session();
        for path in [
            "/admin/dashboard",
            "/admin/reports",
            "/admin/analytics",
            "/admin/departments",
        ] {
            assert_eq!(routes.decide(&session, path), AccessDecision::Allow);
        }
        assert_eq!(
            routes.decide(&session, "/user/dashboard"),
            AccessDecision::RedirectToHome
        );
    }

    #[tokio::test]
    async fn test_user_login() {
        let h = Harness::new();

        let identity = h.controller.login("user@gmail.com", "user123").await.unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(h.landed_on().as_deref(), Some("/user/dashboard"));

        let session = h.controller.session();
        let routes = h.controller.routes();
        assert_eq!(
            routes.decide(&session, "/user/dashboard"),
            AccessDecision::Allow
        );
        assert_eq!(
            routes.decide(&session, "/admin/dashboard"),
            AccessDecision::RedirectToHome
        );
    }

    #[tokio::test]
    async fn test_unknown_credentials_leave_session_unchanged() {
        let h = Harness::new();

        let err = h
            .controller
            .login("citizen@gmail.com", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(h.controller.session(), Session::anonymous());
        assert!(h.storage.is_empty());
        assert!(h.landed_on().is_none());

        // A failed attempt does not sign an existing user out
        h.controller.login("user@gmail.com", "user123").await.unwrap();
        let before = h.controller.session();
        h.controller
            .login("admin@gmail.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(h.controller.session(), before);
    }

    #[tokio::test]
    async fn test_verify_otp_code_for_any_email() {
        for (email, role) in [
            ("new.citizen@city.gov", Role::User),
            ("admin@localhost", Role::Admin),
            ("ops@intranet", Role::User),
            ("citizen", Role::User),
        ] {
            let h = Harness::new();

            let identity = h.controller.verify_otp(email, "123456").await.unwrap();
            assert_eq!(identity.role, role, "{email}");
            assert_eq!(identity.email.as_str(), email);
            assert_eq!(
                h.controller.session().token().unwrap().expose(),
                "mock-jwt-verified"
            );
        }
    }

    #[tokio::test]
    async fn test_verify_otp_wrong_code() {
        let h = Harness::new();
        for code in ["654321", "000000", "123457", "999999", "012345"] {
            let err = h
                .controller
                .verify_otp("new.citizen@city.gov", code)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::InvalidOtp), "{code}");
            assert!(!h.controller.session().is_authenticated());
        }
        assert!(h.storage.is_empty());
        assert!(h.landed_on().is_none());
    }

    #[tokio::test]
    async fn test_anonymous_visit_to_user_page() {
        let h = Harness::new();

        let decision = h.controller.visit("/user/reports");
        assert_eq!(decision, AccessDecision::RedirectToLogin);
        assert_eq!(h.landed_on().as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let h = Harness::new();
        h.controller.login("admin@gmail.com", "admin").await.unwrap();
        assert!(h.storage.get("civic_token").unwrap().is_some());

        h.controller.logout();

        assert_eq!(h.controller.session(), Session::anonymous());
        assert_eq!(h.storage.get("civic_user").unwrap(), None);
        assert_eq!(h.storage.get("civic_token").unwrap(), None);
        assert_eq!(h.store.load(), Session::anonymous());
        assert_eq!(h.landed_on().as_deref(), Some("/"));
    }
}

#[cfg(test)]
mod flow_tests {
    use std::time::Duration;

    use super::harness::Harness;
    use crate::application::controller::{Flow, FlowState};
    use crate::domain::value_object::email::Email;
    use crate::error::AuthError;
    use crate::infra::mock::MockConfig;

    #[tokio::test]
    async fn test_flows_start_idle() {
        let h = Harness::new();
        for flow in [Flow::Login, Flow::Register, Flow::RequestOtp, Flow::VerifyOtp] {
            assert_eq!(h.controller.flow_state(flow), FlowState::Idle);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_is_requesting_while_in_flight() {
        let h = Harness::with_mock(MockConfig::with_latency(Duration::from_millis(1000)));

        let (result, observed) = tokio::join!(h.controller.login("admin@gmail.com", "admin"), async {
            tokio::task::yield_now().await;
            h.controller.flow_state(Flow::Login)
        });

        assert!(result.is_ok());
        assert_eq!(observed, FlowState::Requesting);
        assert_eq!(h.controller.flow_state(Flow::Login), FlowState::Authenticated);
    }

    #[tokio::test]
    async fn test_login_failure_state() {
        let h = Harness::new();
        h.controller.login("admin@gmail.com", "nope").await.unwrap_err();
        assert_eq!(h.controller.flow_state(Flow::Login), FlowState::Failed);

        // Retrying is just calling again
        h.controller.login("admin@gmail.com", "admin").await.unwrap();
        assert_eq!(h.controller.flow_state(Flow::Login), FlowState::Authenticated);
    }

    #[tokio::test]
    async fn test_login_email_case_is_ignored_password_case_is_not() {
        let h = Harness::new();

        let identity = h.controller.login(" ADMIN@Gmail.COM ", "admin").await.unwrap();
        assert_eq!(identity.email.as_str(), "admin@gmail.com");

        h.controller.logout();
        for password in ["ADMIN", "Admin", "admin "] {
            let err = h.controller.login("admin@gmail.com", password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials), "{password:?}");
        }
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_input_locally() {
        let h = Harness::new();
        for (email, password) in [("not-an-email", "admin"), ("admin@gmail.com", "   ")] {
            let err = h.controller.login(email, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
        assert!(h.landed_on().is_none());
    }

    #[tokio::test]
    async fn test_register_goes_to_otp_with_email() {
        let h = Harness::new();

        h.controller
            .register("Asha Rao", " Asha@City.gov ", "s3cret")
            .await
            .unwrap();

        assert_eq!(h.controller.flow_state(Flow::Register), FlowState::AwaitingOtp);
        assert!(!h.controller.session().is_authenticated());

        let location = h.navigator.current().unwrap();
        assert_eq!(location.path, "/verify-otp");
        assert_eq!(location.email, Some(Email::new("asha@city.gov").unwrap()));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let h = Harness::new();
        for (name, email, password) in [
            ("  ", "asha@city.gov", "s3cret"),
            ("Asha", "asha", "s3cret"),
            ("Asha", "asha@city.gov", ""),
        ] {
            let err = h
                .controller
                .register(name, email, password)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::Registration(_)));
        }
        assert_eq!(h.controller.flow_state(Flow::Register), FlowState::Failed);
        assert!(h.landed_on().is_none());
    }

    #[tokio::test]
    async fn test_request_otp() {
        let h = Harness::new();

        h.controller.request_otp("asha@city.gov").await.unwrap();
        assert_eq!(h.controller.flow_state(Flow::RequestOtp), FlowState::Sent);
        assert!(h.landed_on().is_none());

        let err = h.controller.request_otp("asha").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
        assert_eq!(h.controller.flow_state(Flow::RequestOtp), FlowState::Failed);
    }

    #[tokio::test]
    async fn test_verify_otp_validation() {
        let h = Harness::new();

        for email in ["", "   "] {
            let err = h.controller.verify_otp(email, "123456").await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidInput(_)));
        }

        for code in ["12345", "1234567", "12a456", ""] {
            let err = h
                .controller
                .verify_otp("asha@city.gov", code)
                .await
                .unwrap_err();
            assert!(matches!(err, AuthError::InvalidOtp));
        }
    }

    #[tokio::test]
    async fn test_verify_otp_lands_on_role_home() {
        let h = Harness::new();
        h.controller
            .verify_otp("admin.ops@city.gov", "123456")
            .await
            .unwrap();
        assert_eq!(h.landed_on().as_deref(), Some("/admin/dashboard"));
        assert_eq!(h.controller.flow_state(Flow::VerifyOtp), FlowState::Authenticated);
    }

    #[tokio::test]
    async fn test_logout_resets_flows() {
        let h = Harness::new();
        h.controller.login("user@gmail.com", "user123").await.unwrap();
        h.controller.logout();
        assert_eq!(h.controller.flow_state(Flow::Login), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_logout_when_signed_out() {
        let h = Harness::new();
        h.controller.logout();
        assert!(!h.controller.session().is_authenticated());
        assert_eq!(h.landed_on().as_deref(), Some("/"));
    }
}

#[cfg(test)]
mod visit_tests {
    use super::harness::Harness;
    use crate::domain::entity::route_rule::AccessDecision;
    use crate::presentation::routes::{ADMIN_MENU, PUBLIC_MENU, USER_MENU};

    #[tokio::test]
    async fn test_visit_allowed_lands_on_path() {
        let h = Harness::new();
        h.controller.login("user@gmail.com", "user123").await.unwrap();

        assert_eq!(h.controller.visit("/user/submit"), AccessDecision::Allow);
        assert_eq!(h.landed_on().as_deref(), Some("/user/submit"));
    }

    #[tokio::test]
    async fn test_visit_wrong_role_goes_home() {
        let h = Harness::new();
        h.controller.login("user@gmail.com", "user123").await.unwrap();

        assert_eq!(
            h.controller.visit("/admin/analytics"),
            AccessDecision::RedirectToHome
        );
        assert_eq!(h.landed_on().as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_visit_public_and_unknown_paths() {
        let h = Harness::new();
        assert_eq!(h.controller.visit("/map"), AccessDecision::Allow);
        assert_eq!(h.controller.visit("/no/such/page"), AccessDecision::Allow);
        assert_eq!(h.landed_on().as_deref(), Some("/no/such/page"));
    }

    #[tokio::test]
    async fn test_menu_follows_session() {
        let h = Harness::new();
        assert_eq!(h.controller.menu(), &PUBLIC_MENU[..]);

        h.controller.login("admin@gmail.com", "admin").await.unwrap();
        assert_eq!(h.controller.menu(), &ADMIN_MENU[..]);

        h.controller.logout();
        h.controller.login("user@gmail.com", "user123").await.unwrap();
        assert_eq!(h.controller.menu(), &USER_MENU[..]);
    }
}

#[cfg(test)]
mod persistence_tests {
    use std::sync::Arc;

    use platform::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    use super::harness::Harness;
    use crate::application::config::AuthConfig;
    use crate::application::session_store::SessionStore;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::role::Role;
    use crate::infra::mock::MockConfig;

    #[tokio::test]
    async fn test_session_survives_restart() {
        let storage = Arc::new(MemoryStorage::new());

        let first = Harness::with_storage(Arc::clone(&storage), MockConfig::default());
        first.controller.login("admin@gmail.com", "admin").await.unwrap();
        let signed_in = first.controller.session();
        drop(first);

        let second = Harness::with_storage(storage, MockConfig::default());
        assert_eq!(second.controller.session(), signed_in);
        assert_eq!(second.controller.session().role(), Some(Role::Admin));
    }

    #[test]
    fn test_file_backed_store_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("civic").join("session.json");
        let config = Arc::new(AuthConfig::default());

        let store = SessionStore::open(FileStorage::new(&path), Arc::clone(&config));
        assert_eq!(store.get(), Session::anonymous());

        let session = Session::authenticated(
            crate::domain::entity::identity::Identity::new(
                Role::User,
                crate::domain::value_object::email::Email::new("user@gmail.com").unwrap(),
            ),
            crate::domain::value_object::access_token::AccessToken::new("mock-jwt-user").unwrap(),
        );
        store.set(session.clone()).unwrap();
        drop(store);

        let reopened = SessionStore::open(FileStorage::new(&path), Arc::clone(&config));
        assert_eq!(reopened.get(), session);

        reopened.clear();
        let again = SessionStore::open(FileStorage::new(&path), config);
        assert_eq!(again.get(), Session::anonymous());
    }

    #[test]
    fn test_corrupt_session_file_opens_anonymous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "\u{0}garbage").unwrap();

        let store = SessionStore::open(FileStorage::new(&path), Arc::new(AuthConfig::default()));
        assert_eq!(store.get(), Session::anonymous());

        // Opening rewrote the file as a valid (empty) map
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "{}");
    }
}
