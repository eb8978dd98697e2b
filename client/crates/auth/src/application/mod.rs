//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod controller;
pub mod login;
pub mod logout;
pub mod register;
pub mod request_otp;
pub mod route_guard;
pub mod session_store;
pub mod verify_otp;

// Re-exports
pub use config::AuthConfig;
pub use controller::{Flow, FlowState, SessionController};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use request_otp::{RequestOtpInput, RequestOtpUseCase};
pub use route_guard::guard;
pub use session_store::SessionStore;
pub use verify_otp::{VerifyOtpInput, VerifyOtpOutput, VerifyOtpUseCase};
