use actix_web::HttpRequest;

/// Requester address used as the rate-limit identity
///
/// The peer address, unless the peer is a trusted proxy, in which case the
/// first hop of `X-Forwarded-For`, then `X-Real-IP`, is used.
pub fn extract_client_ip(req: &HttpRequest, trusted_proxies: &[String]) -> String {
    let peer_ip = req.peer_addr().map(|addr| addr.ip().to_string());

    match peer_ip {
        Some(ip) if is_trusted_proxy(&ip, trusted_proxies) => {
            forwarded_ip(req).unwrap_or(ip)
        }
        Some(ip) => ip,
        None => "unknown".to_string(),
    }
}

/// Checks if the peer IP is in the trusted proxy list
fn is_trusted_proxy(peer_ip: &str, trusted_proxies: &[String]) -> bool {
    trusted_proxies.iter().any(|trusted| trusted == peer_ip)
}

fn forwarded_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
                return Some(ip.to_string());
            }
        }
    }

    req.headers()
        .get("X-Real-IP")
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
}
