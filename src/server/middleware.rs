//! Application-wide middleware and extractor configuration.

use actix_cors::Cors;
use actix_web::web;
use log::debug;

use crate::error::MockError;

/// Seconds browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Unrestricted CORS: any origin, method and header, with credentials.
///
/// Local demo backend only; not a production security posture.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE)
}

/// JSON extractor settings: body errors surface as `422` with a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("rejected request body: {err}");
        MockError::InvalidRequest(err.to_string()).into()
    })
}
