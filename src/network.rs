//! Network URL constants and API root resolution.

/// API root used when the page is served from a local development host.
pub const DEV_API_URL: &str = "http://localhost:5000/api/v1";

/// Path prefix every deployed API root ends with.
pub const API_PREFIX: &str = "/api/v1";

/// The location of the page (or process) hosting the client.
///
/// Mirrors the `protocol`, `hostname`, and `port` parts of a browser's
/// `window.location`. `port` is empty when the scheme's default is in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub protocol: String,
    pub hostname: String,
    pub port: String,
}

impl PageLocation {
    pub fn new(protocol: &str, hostname: &str, port: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
        }
    }

    /// Read the current browser location.
    #[cfg(feature = "wasm")]
    pub fn current() -> Option<Self> {
        let location = web_sys::window()?.location();
        Some(Self {
            protocol: location.protocol().ok()?,
            hostname: location.hostname().ok()?,
            port: location.port().ok()?,
        })
    }

    fn is_local(&self) -> bool {
        matches!(self.hostname.as_str(), "localhost" | "127.0.0.1" | "")
    }

    fn scheme(&self) -> &str {
        self.protocol.trim_end_matches(':')
    }

    fn default_port(&self) -> Option<&'static str> {
        match self.scheme() {
            "http" => Some("80"),
            "https" => Some("443"),
            _ => None,
        }
    }
}

/// Resolve the API root for a page location.
///
/// Local hosts (`localhost`, `127.0.0.1`, or no host at all) get
/// [`DEV_API_URL`]. Everything else gets `{scheme}://{host}[:{port}]/api/v1`,
/// with the port omitted when empty or equal to the scheme's default.
pub fn resolve_base_url(location: &PageLocation) -> String {
    if location.is_local() {
        return DEV_API_URL.to_string();
    }

    let port = location.port.as_str();
    let port_suffix = if port.is_empty() || location.default_port() == Some(port) {
        String::new()
    } else {
        format!(":{}", port)
    };

    format!(
        "{}://{}{}{}",
        location.scheme(),
        location.hostname,
        port_suffix,
        API_PREFIX
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_dev_root() {
        for host in ["localhost", "127.0.0.1", ""] {
            let loc = PageLocation::new("http:", host, "8080");
            assert_eq!(resolve_base_url(&loc), DEV_API_URL);
        }
    }

    #[test]
    fn remote_host_without_port() {
        let loc = PageLocation::new("https:", "shop.example.com", "");
        assert_eq!(resolve_base_url(&loc), "https://shop.example.com/api/v1");
    }

    #[test]
    fn remote_host_with_custom_port() {
        let loc = PageLocation::new("http:", "10.0.0.7", "8000");
        assert_eq!(resolve_base_url(&loc), "http://10.0.0.7:8000/api/v1");
    }

    #[test]
    fn default_port_is_dropped() {
        let loc = PageLocation::new("https", "shop.example.com", "443");
        assert_eq!(resolve_base_url(&loc), "https://shop.example.com/api/v1");
    }

    #[test]
    fn protocol_accepted_without_colon() {
        let loc = PageLocation::new("http", "api.example.com", "");
        assert_eq!(resolve_base_url(&loc), "http://api.example.com/api/v1");
    }
}
