//! URL validation and host-key extraction.

use url::Url;

/// Parse a raw string into an absolute `http`/`https` URL with a host.
///
/// The returned URL is in normalized form (lowercase scheme and host, default
/// port elided, empty path becomes `/`), which is also the result-cache key.
pub fn parse_probe_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme `{other}`")),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".into());
    }
    Ok(url)
}

/// Key used for per-host counters: the host component only, without scheme,
/// port, or credentials.
pub fn host_key(url: &Url) -> String {
    url.host_str().unwrap_or_default().to_ascii_lowercase()
}
