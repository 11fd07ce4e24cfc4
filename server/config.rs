/// Server configuration, resolved once at startup and passed explicitly
/// into the dispatch path. Cross-origin policy lives here rather than in
/// any global registry.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Value of the `Access-Control-Allow-Origin` header on every response.
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 5000,
            allowed_origin: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// `PORT` selects the bind port (default 5000, matching the deployment
    /// convention of PaaS hosts); an unparsable value falls back to the
    /// default. `ALLOWED_ORIGIN` overrides the CORS origin (default `*`).
    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.allowed_origin);
        ServerConfig {
            port,
            allowed_origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_deployment_convention() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.allowed_origin, "*");
    }
}
