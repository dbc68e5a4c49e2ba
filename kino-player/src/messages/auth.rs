use crate::infrastructure::ApiError;
use crate::infrastructure::services::auth::LoginResponse;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    SubmitLogin,
    LoginCompleted {
        name: String,
        result: Result<LoginResponse, ApiError>,
    },
    SubmitRegister,
    RegisterCompleted(Result<(), ApiError>),
    GoToSignUp,
    GoToLogin,
    Logout,
    /// Raised when any backend call came back 401.
    SessionExpired,
}
