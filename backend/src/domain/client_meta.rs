//! Request metadata captured alongside every submission.

/// Submitter network metadata recorded for audit purposes.
///
/// Both fields are best-effort: a proxy may strip the forwarding header and
/// clients may omit a user agent entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMeta {
    /// Submitter IP address (IPv4 or IPv6 textual form).
    pub ip_address: Option<String>,
    /// Raw `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl ClientMeta {
    /// Metadata with both fields absent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ip_address: None,
            user_agent: None,
        }
    }
}
