//! Locale-prefix redirect middleware

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use super::Locale;

const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp"];

/// Paths served without a locale prefix
fn is_exempt(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return true;
    }
    if matches!(path, "/health" | "/sitemap.xml" | "/favicon.ico") {
        return true;
    }
    if path == "/metrics" || path.starts_with("/metrics/") {
        return true;
    }
    path.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.ends_with('/') && IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
    })
}

fn has_locale_prefix(path: &str) -> bool {
    Locale::ALL.iter().any(|locale| {
        let code = locale.code();
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(code))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Where a request for `path` should be redirected, if anywhere.
///
/// Paths without a supported locale prefix move under the default locale;
/// the query string is preserved.
pub fn redirect_target(path: &str, query: Option<&str>) -> Option<String> {
    if is_exempt(path) || has_locale_prefix(path) {
        return None;
    }

    let default = Locale::DEFAULT.code();
    let mut target = match path {
        "" | "/" => format!("/{}", default),
        p if p.starts_with('/') => format!("/{}{}", default, p),
        p => format!("/{}/{}", default, p),
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}

/// Redirect locale-less page requests to the default locale
pub async fn locale_redirect(request: Request, next: Next) -> Response {
    let uri = request.uri();
    if let Some(target) = redirect_target(uri.path(), uri.query()) {
        debug!("Redirecting {} -> {}", uri.path(), target);
        return Redirect::temporary(&target).into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_paths_pass_through() {
        assert_eq!(redirect_target("/en", None), None);
        assert_eq!(redirect_target("/ja/", None), None);
        assert_eq!(redirect_target("/es/tools/pets/dog", None), None);
        assert_eq!(redirect_target("/de/blog", None), None);
    }

    #[test]
    fn test_locale_less_paths_redirect_to_default() {
        assert_eq!(redirect_target("/", None).as_deref(), Some("/en"));
        assert_eq!(
            redirect_target("/tools/pets/dog", None).as_deref(),
            Some("/en/tools/pets/dog")
        );
        assert_eq!(
            redirect_target("/blog", Some("page=2")).as_deref(),
            Some("/en/blog?page=2")
        );
    }

    #[test]
    fn test_prefix_must_be_a_whole_segment() {
        // "/english" starts with "/en" but is not a locale prefix
        assert_eq!(
            redirect_target("/english", None).as_deref(),
            Some("/en/english")
        );
        assert_eq!(redirect_target("/fr/tools", None).as_deref(), Some("/en/fr/tools"));
    }

    #[test]
    fn test_exempt_paths() {
        assert_eq!(redirect_target("/api/process", None), None);
        assert_eq!(redirect_target("/health", None), None);
        assert_eq!(redirect_target("/metrics/prometheus", None), None);
        assert_eq!(redirect_target("/sitemap.xml", None), None);
        assert_eq!(redirect_target("/favicon.ico", None), None);
        assert_eq!(redirect_target("/dog-photo.png", None), None);
        assert_eq!(redirect_target("/images/cat.JPEG", None), None);
    }
}
