use super::config::CorsConfig;
use actix_cors::Cors;

/// Build the CORS middleware for the configured origins.
///
/// An origin of `"*"` allows any origin.
pub fn build_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            _ => cors.allowed_origin(origin),
        })
        .supports_credentials()
        .allow_any_method()
        .allow_any_header()
        .expose_any_header()
        .max_age(config.max_age)
}
