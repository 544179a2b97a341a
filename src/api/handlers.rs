use axum::{
    extract::{rejection::FormRejection, State},
    http::{StatusCode, Uri},
    response::Redirect,
    Extension, Form, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    services::{recommendations, ContactMessage},
};

use super::views::{ContactView, IndexView, Notice, RecommendView};
use super::AppState;

/// Number of popular books listed on the homepage
pub const HOMEPAGE_BOOK_COUNT: usize = 20;

/// Cookie carrying the one-shot notice across the contact redirect
pub const FLASH_COOKIE: &str = "flash";

const FLASH_SUCCESS: &str = "success";

const CONTACT_THANKS: Notice = Notice {
    category: FLASH_SUCCESS,
    message: "Thank you for reaching out! We will get back to you soon.",
};

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub user_input: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Homepage listing the most popular books
pub async fn index(State(state): State<AppState>) -> Json<IndexView> {
    Json(IndexView::from(state.catalog.top_popular(HOMEPAGE_BOOK_COUNT)))
}

/// Empty recommendation form
pub async fn recommend_ui() -> Json<RecommendView> {
    Json(RecommendView::default())
}

/// Looks up books similar to the submitted title
pub async fn recommend_books(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<RecommendForm>, FormRejection>,
) -> AppResult<Json<RecommendView>> {
    let Form(form) = form?;

    match recommendations::recommend(&state.catalog, &form.user_input) {
        Ok(items) => {
            tracing::info!(
                request_id = %request_id,
                query = %form.user_input,
                results = items.len(),
                "Recommendations served"
            );
            Ok(Json(RecommendView::data(items)))
        }
        Err(not_found) => {
            tracing::info!(
                request_id = %request_id,
                query = %not_found.query,
                "No recommendations for unknown title"
            );
            Ok(Json(RecommendView::error(not_found.to_string())))
        }
    }
}

/// Contact form, showing the thank-you notice once after a submission
pub async fn contact(jar: CookieJar) -> (CookieJar, Json<ContactView>) {
    let Some(succeeded) = jar
        .get(FLASH_COOKIE)
        .map(|cookie| cookie.value() == FLASH_SUCCESS)
    else {
        return (jar, Json(ContactView::default()));
    };

    let notice = succeeded.then_some(CONTACT_THANKS);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, Json(ContactView { notice }))
}

/// Records a contact submission and redirects back to the form
///
/// Persistence is best-effort: a failed append is logged and the submitter
/// still gets the acknowledgment.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    jar: CookieJar,
    form: Result<Form<ContactMessage>, FormRejection>,
) -> AppResult<(CookieJar, Redirect)> {
    let Form(message) = form?;

    match state.messages.append(&message).await {
        Ok(()) => tracing::info!(request_id = %request_id, "Contact message stored"),
        Err(e) => tracing::error!(
            request_id = %request_id,
            error = %e,
            "Failed to store contact message"
        ),
    }

    let flash = Cookie::build((FLASH_COOKIE, FLASH_SUCCESS))
        .path("/")
        .http_only(true);
    Ok((jar.add(flash), Redirect::to("/contact")))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}
