//! Signup, login, and logout handlers.
//!
//! The session holds at most one key, the logged-in user's id. Login is the
//! only transition into the authenticated state and logout the only one
//! out; signup never logs the new user in.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use paws_api::auth::SESSION_USER_ID_KEY;
use paws_api::forms::{error_messages, LoginForm, SignUpForm};
use paws_api::User;
use tera::Context;
use tower_sessions::Session;
use validator::Validate;

use super::render;
use crate::error::AppError;
use crate::state::AppState;

const DUPLICATE_EMAIL_MESSAGE: &str =
    "This Email already exists in the system! Please Login instead.";
const SIGNUP_OK_MESSAGE: &str = "Successfully signed up";
const WRONG_CREDENTIALS_MESSAGE: &str = "Wrong Credentials. Please Try Again.";
const LOGIN_OK_MESSAGE: &str = "Successfully Logged In!";

pub async fn signup_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("form", &SignUpForm::default());
    render(&state, "signup.html", &context)
}

pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();

    if let Err(errors) = form.validate() {
        context.insert("form", &form);
        context.insert("errors", &error_messages(&errors));
        return render(&state, "signup.html", &context);
    }

    match User::create(&state.pool, &form.full_name, &form.email, &form.password).await {
        Ok(_) => {
            context.insert("message", SIGNUP_OK_MESSAGE);
            render(&state, "signup.html", &context)
        }
        Err(err) => {
            if !matches!(err, paws_api::Error::Duplicate) {
                tracing::error!(error = %err, "signup insert failed, rolled back");
            }
            context.insert("form", &form);
            context.insert("message", DUPLICATE_EMAIL_MESSAGE);
            render(&state, "signup.html", &context)
        }
    }
}

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("form", &LoginForm::default());
    render(&state, "login.html", &context)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();

    if let Err(errors) = form.validate() {
        context.insert("form", &form);
        context.insert("errors", &error_messages(&errors));
        return render(&state, "login.html", &context);
    }

    match User::authenticate(&state.pool, &form.email, &form.password).await? {
        Some(user) => {
            session.insert(SESSION_USER_ID_KEY, user.id).await?;
            context.insert("message", LOGIN_OK_MESSAGE);
            render(&state, "login.html", &context)
        }
        None => {
            context.insert("form", &form);
            context.insert("message", WRONG_CREDENTIALS_MESSAGE);
            render(&state, "login.html", &context)
        }
    }
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    let _ = session.remove::<i64>(SESSION_USER_ID_KEY).await?;
    Ok(Redirect::to("/"))
}
