use iced::Task;

use crate::infrastructure::ApiError;
use crate::messages::{Message, auth};
use crate::session::Session;
use crate::state::{LoginForm, Screen, SignUpForm, State};
use crate::updates::{deck_updates, for_you_updates};

pub fn handle(state: &mut State, message: auth::Message) -> Task<Message> {
    match message {
        auth::Message::NameChanged(value) => {
            match &mut state.screen {
                Screen::Login(form) => form.name = value,
                Screen::SignUp(form) => form.name = value,
                Screen::Browse => {}
            }
            Task::none()
        }
        auth::Message::EmailChanged(value) => {
            if let Screen::SignUp(form) = &mut state.screen {
                form.email = value;
            }
            Task::none()
        }
        auth::Message::PasswordChanged(value) => {
            match &mut state.screen {
                Screen::Login(form) => form.password = value,
                Screen::SignUp(form) => form.password = value,
                Screen::Browse => {}
            }
            Task::none()
        }
        auth::Message::TogglePasswordVisibility => {
            match &mut state.screen {
                Screen::Login(form) => form.show_password = !form.show_password,
                Screen::SignUp(form) => form.show_password = !form.show_password,
                Screen::Browse => {}
            }
            Task::none()
        }
        auth::Message::GoToSignUp => {
            state.screen = Screen::SignUp(SignUpForm::default());
            Task::none()
        }
        auth::Message::GoToLogin => {
            state.screen = Screen::Login(LoginForm::default());
            Task::none()
        }
        auth::Message::SubmitLogin => handle_submit_login(state),
        auth::Message::LoginCompleted { name, result } => {
            handle_login_completed(state, name, result)
        }
        auth::Message::SubmitRegister => handle_submit_register(state),
        auth::Message::RegisterCompleted(result) => handle_register_completed(state, result),
        auth::Message::Logout => {
            log::info!("[Auth] logging out");
            state.auth.logout();
            state.clear_session_state();
            state.screen = Screen::Login(LoginForm::default());
            Task::none()
        }
        auth::Message::SessionExpired => session_expired(state),
    }
}

fn handle_submit_login(state: &mut State) -> Task<Message> {
    let Screen::Login(form) = &mut state.screen else {
        return Task::none();
    };
    if form.submitting || form.name.is_empty() || form.password.is_empty() {
        return Task::none();
    }
    form.submitting = true;
    form.error = None;
    form.info = None;

    let auth = state.auth.clone();
    let name = form.name.clone();
    let password = form.password.clone();
    Task::perform(
        async move {
            let result = auth.login(&name, &password).await;
            (name, result)
        },
        |(name, result)| Message::Auth(auth::Message::LoginCompleted { name, result }),
    )
}

fn handle_login_completed(
    state: &mut State,
    name: String,
    result: Result<crate::infrastructure::services::auth::LoginResponse, ApiError>,
) -> Task<Message> {
    match result {
        Ok(response) => {
            log::info!("[Auth] login succeeded for {}", name);
            // Token is already installed on the shared client.
            state.clear_session_state();
            state.session = Some(Session::new(response.token, name));
            state.screen = Screen::Browse;
            state.initial_loading = true;

            Task::batch([
                deck_updates::start_top_up(state),
                for_you_updates::start_refresh(state),
            ])
        }
        Err(err) => {
            log::warn!("[Auth] login failed: {}", err);
            if let Screen::Login(form) = &mut state.screen {
                form.submitting = false;
                form.error = Some(match err {
                    ApiError::Unauthorized => "Wrong name or password.".to_string(),
                    other => other.to_string(),
                });
            }
            Task::none()
        }
    }
}

fn handle_submit_register(state: &mut State) -> Task<Message> {
    let Screen::SignUp(form) = &mut state.screen else {
        return Task::none();
    };
    if form.submitting || form.email.is_empty() || form.name.is_empty() || form.password.is_empty()
    {
        return Task::none();
    }
    form.submitting = true;
    form.error = None;

    let auth = state.auth.clone();
    let email = form.email.clone();
    let name = form.name.clone();
    let password = form.password.clone();
    Task::perform(
        async move { auth.register(&email, &name, &password).await },
        |result| Message::Auth(auth::Message::RegisterCompleted(result)),
    )
}

fn handle_register_completed(state: &mut State, result: Result<(), ApiError>) -> Task<Message> {
    match result {
        Ok(()) => {
            log::info!("[Auth] registration succeeded");
            state.screen = Screen::Login(LoginForm {
                info: Some("Account created. Log in!".to_string()),
                ..LoginForm::default()
            });
        }
        Err(err) => {
            log::warn!("[Auth] registration failed: {}", err);
            if let Screen::SignUp(form) = &mut state.screen {
                form.submitting = false;
                form.error = Some(err.to_string());
            }
        }
    }
    Task::none()
}

/// Any 401 lands here: drop the credential and force the login screen.
pub fn session_expired(state: &mut State) -> Task<Message> {
    log::warn!("[Auth] session rejected by the backend, returning to login");
    state.auth.logout();
    state.clear_session_state();
    state.screen = Screen::Login(LoginForm {
        error: Some("Session expired. Please log in again.".to_string()),
        ..LoginForm::default()
    });
    Task::none()
}
