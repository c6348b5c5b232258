//! Header helpers for the gateway compat endpoint.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

use crate::error::GatewayError;

/// Authorization header understood by authenticated AI Gateways
pub const CF_AIG_AUTHORIZATION: &str = "cf-aig-authorization";

/// Build request headers.
///
/// Includes:
/// - `Content-Type: application/json`
/// - `cf-aig-authorization: Bearer <token>`
/// - extra headers passthrough (cannot override the two above)
pub fn build_headers(
    token: &str,
    extra_headers: &HashMap<String, String>,
) -> Result<HeaderMap, GatewayError> {
    let mut headers = HeaderMap::new();

    for (k, v) in extra_headers {
        let name: HeaderName = k.parse().map_err(|e| {
            GatewayError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
        })?;
        let value: HeaderValue = v.parse().map_err(|e| {
            GatewayError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
        })?;
        headers.insert(name, value);
    }

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut auth: HeaderValue = format!("Bearer {token}")
        .parse()
        .map_err(|e| GatewayError::ConfigurationError(format!("Invalid gateway token: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(CF_AIG_AUTHORIZATION, auth);

    Ok(headers)
}
