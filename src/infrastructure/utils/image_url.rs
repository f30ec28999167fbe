use url::Url;

use crate::constants::PLACEHOLDER_IMAGE;

/// Resolves a stored image URL to something the frontend can render.
///
/// Backslashes (Windows-style upload paths) become forward slashes. Anything
/// that does not look like a URL or an absolute local path is treated as a
/// local path. A value starting with `http` must parse as an absolute URL,
/// otherwise the placeholder is substituted.
pub fn normalize_image_url(image_url: Option<&str>) -> String {
    let Some(raw) = image_url else {
        return PLACEHOLDER_IMAGE.to_string();
    };

    let mut normalized = raw.replace('\\', "/");
    if !normalized.starts_with('/') && !normalized.starts_with("http") {
        normalized = format!("/{normalized}");
    }
    if normalized.starts_with('/') {
        // Local path, served as-is without an existence check.
        return normalized;
    }

    match Url::parse(&normalized) {
        Ok(_) => normalized,
        Err(e) => {
            tracing::debug!("Invalid image URL {:?}: {}", raw, e);
            PLACEHOLDER_IMAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_yields_placeholder() {
        assert_eq!(normalize_image_url(None), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn bare_relative_path_gains_leading_slash() {
        assert_eq!(normalize_image_url(Some("img/x.png")), "/img/x.png");
    }

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(
            normalize_image_url(Some("images\\uploads\\shot.png")),
            "/images/uploads/shot.png"
        );
    }

    #[test]
    fn absolute_url_passes_through_unchanged() {
        assert_eq!(
            normalize_image_url(Some("https://a.b/c.png")),
            "https://a.b/c.png"
        );
    }

    #[test]
    fn local_path_is_accepted_without_existence_check() {
        assert_eq!(normalize_image_url(Some("/images/own.png")), "/images/own.png");
    }

    #[test]
    fn http_prefixed_garbage_yields_placeholder() {
        // Starts with "http" so it skips the local-path branch, then fails
        // to parse as an absolute URL.
        assert_eq!(normalize_image_url(Some("http//bad url")), PLACEHOLDER_IMAGE);
    }
}
