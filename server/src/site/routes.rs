//! HTTP route handlers for the localized pages and the sitemap

use axum::{
    Extension, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;

use super::render;
use crate::catalog::{BlogPost, Category};
use crate::locale::Locale;

/// Shared state for the page routes
#[derive(Clone)]
pub struct SiteAppState {
    pub public_base_url: Arc<str>,
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Niche {niche} is not part of category {category}")]
    UnknownNiche { category: String, niche: String },

    #[error("Blog post not found: {0}")]
    PostNotFound(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::debug!("Page not found: {}", self);
        counter!("colorpage_page_views_total", "page" => "not_found").increment(1);
        (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
    }
}

/// GET /{lang}
async fn home(Extension(locale): Extension<Locale>) -> Html<String> {
    counter!("colorpage_page_views_total", "page" => "home").increment(1);
    Html(render::home_page(locale))
}

/// GET /{lang}/tools/:category/:niche
async fn niche_page(
    Extension(locale): Extension<Locale>,
    Path((category, niche)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let cat = Category::parse(&category)
        .ok_or_else(|| PageError::UnknownCategory(category.clone()))?;
    if !cat.contains(&niche) {
        return Err(PageError::UnknownNiche { category, niche });
    }
    counter!("colorpage_page_views_total", "page" => "niche").increment(1);
    Ok(Html(render::niche_page(locale, &niche)))
}

/// GET /{lang}/blog
async fn blog_index(Extension(locale): Extension<Locale>) -> Html<String> {
    counter!("colorpage_page_views_total", "page" => "blog_index").increment(1);
    Html(render::blog_index(locale))
}

/// GET /{lang}/blog/:slug
async fn blog_post(
    Extension(locale): Extension<Locale>,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let post = BlogPost::find(locale, &slug).ok_or(PageError::PostNotFound(slug))?;
    counter!("colorpage_page_views_total", "page" => "blog_post").increment(1);
    Ok(Html(render::blog_post(locale, post)))
}

/// GET /sitemap.xml
async fn sitemap(State(state): State<SiteAppState>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render::sitemap_xml(&state.public_base_url, today),
    )
}

/// HTML 404 used for unmatched paths
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
}

fn locale_routes(locale: Locale) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/tools/:category/:niche", get(niche_page))
        .route("/blog", get(blog_index))
        .route("/blog/:slug", get(blog_post))
        .layer(Extension(locale))
}

/// Build page routes: one nested router per supported locale plus the sitemap
pub fn site_routes(state: SiteAppState) -> Router {
    let mut router = Router::new()
        .route("/sitemap.xml", get(sitemap))
        .with_state(state);
    for locale in Locale::ALL {
        router = router.nest(&format!("/{}", locale.code()), locale_routes(locale));
    }
    router
}
