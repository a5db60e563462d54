use crate::store::views;
use axum::{
    response::{Html, IntoResponse},
    Form,
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    username: String,
    #[allow(dead_code)]
    password: SecretString,
}

/// Registration stub: accepts the form and returns the landing page without
/// writing to the directory. Account creation is intentionally unimplemented
/// until the registration contract is specified.
#[instrument(skip_all)]
pub async fn register(payload: Option<Form<RegisterForm>>) -> impl IntoResponse {
    if let Some(Form(form)) = payload {
        debug!("Registration requested for username: {}", form.username);
    }

    Html(views::history())
}
