use http::Method;
use http::header::{HeaderName, HeaderValue};
use persona_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Entries that do not parse as origins, methods or header names are
/// skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = match &config.origins {
        AnyOrArray::Any => AllowOrigin::any(),
        AnyOrArray::List(values) => AllowOrigin::list(parse_all::<HeaderValue>(values, "origin")),
    };

    let methods = match &config.methods {
        AnyOrArray::Any => AllowMethods::any(),
        AnyOrArray::List(values) => AllowMethods::list(parse_all::<Method>(values, "method")),
    };

    let headers = match &config.headers {
        AnyOrArray::Any => AllowHeaders::any(),
        AnyOrArray::List(values) => AllowHeaders::list(parse_all::<HeaderName>(values, "header")),
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers);

    // tower-http panics on credentials combined with a wildcard
    if config.credentials && config.has_wildcard() {
        tracing::warn!("ignoring CORS credentials because a wildcard is configured");
    } else if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}

fn parse_all<T: std::str::FromStr>(values: &[String], kind: &str) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| {
            let parsed = value.parse().ok();
            if parsed.is_none() {
                tracing::warn!(kind, value = %value, "ignoring invalid CORS entry");
            }
            parsed
        })
        .collect()
}
