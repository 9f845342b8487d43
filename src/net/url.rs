//! Request URL normalization against the page's scheme.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

const HTTP: &str = "http://";
const HTTPS: &str = "https://";
const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Normalize `url` for a page served over https when `secure` is set.
///
/// Absolute `http://` URLs are upgraded to `https://` on secure pages unless
/// they target a loopback host. Relative URLs are made root-relative.
pub fn make_api_url(url: &str, secure: bool) -> String {
    if let Some(rest) = url.strip_prefix(HTTP) {
        if secure && !is_loopback(host_of(rest)) {
            return format!("{HTTPS}{rest}");
        }
        return url.to_owned();
    }
    if url.starts_with(HTTPS) || url.starts_with('/') {
        return url.to_owned();
    }
    format!("/{url}")
}

/// Host of a URL with its scheme already stripped, minus userinfo and port.
fn host_of(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    if host_port.starts_with('[') {
        return host_port.find(']').map_or(host_port, |end| &host_port[..=end]);
    }
    host_port.split(':').next().unwrap_or_default()
}

fn is_loopback(host: &str) -> bool {
    LOOPBACK_HOSTS.iter().any(|h| host.eq_ignore_ascii_case(h))
}
