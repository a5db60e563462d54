use crate::{
    auth::SignInFlow,
    store::{handlers::attach_cookie, views},
};
use axum::{
    extract::Extension,
    http::HeaderMap,
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::instrument;

/// Sign the client out. Always succeeds: the response invalidates whatever
/// session cookie the client holds, whether or not one was present.
#[instrument(skip_all)]
pub async fn signout(flow: Extension<Arc<SignInFlow>>) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    attach_cookie(&mut headers, &flow.sign_out());

    (headers, Html(views::signout()))
}
