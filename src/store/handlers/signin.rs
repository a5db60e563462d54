use crate::{
    auth::{SignInFlow, SignInOutcome},
    store::{handlers::attach_cookie, views},
};
use axum::{
    extract::Extension,
    http::{
        header::{CACHE_CONTROL, LOCATION},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse},
    Form,
};
use secrecy::SecretString;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Where an authenticated customer lands; served by the storefront proper.
pub const LANDING_PATH: &str = "/account/history";

// Sign-in page is static enough for a short client cache window.
const SIGNIN_CACHE_CONTROL: &str = "max-age=300";

#[derive(Deserialize, Debug)]
pub struct SignInForm {
    username: String,
    password: SecretString,
}

/// Initial view of the sign-in page.
///
/// Viewing the page also logs the client out: the response always carries an
/// invalidated session cookie.
#[instrument(skip_all)]
pub async fn show_signin(flow: Extension<Arc<SignInFlow>>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(SIGNIN_CACHE_CONTROL));
    attach_cookie(&mut headers, &flow.sign_out());

    (headers, Html(views::signin()))
}

/// Credential submission from the sign-in form.
#[instrument(skip_all)]
pub async fn signin(
    flow: Extension<Arc<SignInFlow>>,
    payload: Option<Form<SignInForm>>,
) -> impl IntoResponse {
    let outcome = match payload {
        Some(Form(form)) => flow.sign_in(&form.username, &form.password).await,
        // A missing or malformed form is just another invalid input
        None => {
            debug!("Rejected sign-in: missing form payload");
            SignInOutcome::Rejected {
                cookie: flow.sign_out(),
            }
        }
    };

    match outcome {
        SignInOutcome::Authenticated { cookie } => {
            let mut headers = HeaderMap::new();
            headers.insert(LOCATION, HeaderValue::from_static(LANDING_PATH));
            attach_cookie(&mut headers, &cookie);

            (StatusCode::SEE_OTHER, headers).into_response()
        }
        SignInOutcome::Rejected { cookie } => {
            let mut headers = HeaderMap::new();
            attach_cookie(&mut headers, &cookie);

            (headers, Html(views::signin())).into_response()
        }
    }
}
