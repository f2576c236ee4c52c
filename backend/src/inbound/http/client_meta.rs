//! Extraction of submitter metadata from the HTTP request.

use actix_web::HttpRequest;
use actix_web::http::header;

use crate::domain::ClientMeta;

/// Forwarding header consulted before the raw peer address.
const FORWARDED_FOR: &str = "X-Forwarded-For";

/// Capture the submitter IP and user agent for audit columns.
///
/// The IP prefers the first `X-Forwarded-For` entry (the original client
/// when behind a proxy) and falls back to the transport peer address.
pub fn extract_client_meta(req: &HttpRequest) -> ClientMeta {
    let forwarded = req
        .headers()
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    let ip_address = forwarded.or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()));

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    ClientMeta {
        ip_address,
        user_agent,
    }
}
