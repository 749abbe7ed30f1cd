//! Login Form State

use crate::api::{ApiError, TodoApi};
use crate::guard::AppRoute;
use crate::models::Credentials;
use crate::session::SessionProvider;

pub const LOGIN_FAILED: &str = "Login failed";
pub const GENERIC_FAILURE: &str = "Something went wrong";
pub const SESSION_NOT_SAVED: &str = "Could not save your session";
pub const MISSING_CREDENTIALS: &str = "Email and password are required";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Message shown above the form
    pub error: Option<String>,
    /// A submission is in flight
    pub busy: bool,
}

impl LoginForm {
    /// Start a submission. Returns `None` while another one is in flight
    /// or when a field is empty.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.busy {
            return None;
        }
        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS.to_string());
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.busy = false;
        self.error = outcome.err();
    }
}

/// Message shown for a failed login
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message, .. }
        | ApiError::Unauthorized { message }
        | ApiError::MissingToken { message } => {
            message.clone().unwrap_or_else(|| LOGIN_FAILED.to_string())
        }
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::NotAuthenticated => {
            GENERIC_FAILURE.to_string()
        }
    }
}

/// Exchange credentials for a token and store it.
///
/// The session is only written when the API returned a token.
pub async fn submit<A, S>(api: &A, session: &S, credentials: &Credentials) -> Result<(), String>
where
    A: TodoApi + ?Sized,
    S: SessionProvider + ?Sized,
{
    let token = api.login(credentials).await.map_err(|e| {
        log::warn!("login failed: {}", e);
        login_error_message(&e)
    })?;

    session.set(&token).map_err(|e| {
        log::error!("{}", e);
        SESSION_NOT_SAVED.to_string()
    })?;
    log::info!("logged in");
    Ok(())
}

/// Drop the session. Returns the route to navigate to.
pub fn logout<S: SessionProvider + ?Sized>(session: &S) -> AppRoute {
    session.clear();
    log::info!("logged out");
    AppRoute::Login
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginForm {
        LoginForm {
            email: "a@b.com".into(),
            password: "x".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_submit_sets_busy() {
        let mut form = filled();
        let credentials = form.begin_submit().unwrap();
        assert_eq!(credentials.email, "a@b.com");
        assert!(form.busy);
    }

    #[test]
    fn test_no_second_submit_while_busy() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut form = LoginForm {
            email: "a@b.com".into(),
            ..Default::default()
        };
        assert!(form.begin_submit().is_none());
        assert!(!form.busy);
        assert_eq!(form.error.as_deref(), Some(MISSING_CREDENTIALS));
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = filled();
        form.error = Some("old".into());
        form.begin_submit();
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_finish_submit() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(Err(LOGIN_FAILED.into()));
        assert!(!form.busy);
        assert_eq!(form.error.as_deref(), Some(LOGIN_FAILED));
    }

    #[test]
    fn test_error_messages() {
        let rejected = ApiError::Rejected {
            status: 400,
            message: Some("Wrong password".into()),
        };
        assert_eq!(login_error_message(&rejected), "Wrong password");
        assert_eq!(
            login_error_message(&ApiError::MissingToken { message: None }),
            LOGIN_FAILED
        );
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            GENERIC_FAILURE
        );
        assert_eq!(
            login_error_message(&ApiError::Decode("eof".into())),
            GENERIC_FAILURE
        );
    }
}
