//! Gateway server command.

use console::style;

use crate::config::Settings;

/// Start the gateway server.
pub async fn cmd_serve(bind: &str, analyzer_url: Option<&str>) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    let mut settings = Settings::default();
    if let Some(url) = analyzer_url {
        settings.analyzer_url = url.to_string();
    }

    println!(
        "{} Relaying analysis requests to {}",
        style("→").cyan(),
        settings.analyzer_url
    );
    println!(
        "{} Starting gateway at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 3030))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_port() {
        let (host, port) = parse_bind_address("8080").unwrap();
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_host_and_port() {
        let (host, port) = parse_bind_address("0.0.0.0:9000").unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_bare_host() {
        let (host, port) = parse_bind_address("localhost").unwrap();
        assert_eq!(host, "localhost");
        assert_eq!(port, 3030);
    }
}
