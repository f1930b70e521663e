use std::time::Duration;

/// Default chat-completions endpoint for script generation
pub const DEFAULT_GENERATOR_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model requested from the generation service
pub const DEFAULT_GENERATOR_MODEL: &str = "gpt-4o-mini";

/// Options for the HTTP API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// Interface to bind (default: 127.0.0.1)
    pub host: String,

    /// Port to listen on (default: 3000)
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set bind host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Builder method: set port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Options for the external text-generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Chat-completions URL
    pub endpoint: String,

    /// Model name sent with each request
    pub model: String,

    /// Bearer token; requests are sent unauthenticated when absent
    pub api_key: Option<String>,

    /// Request timeout (default: 60 seconds)
    pub timeout: Duration,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GENERATOR_ENDPOINT.to_string(),
            model: DEFAULT_GENERATOR_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder method: set model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder method: set API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder method: set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_options() {
        let options = ServerOptions::new().host("0.0.0.0").port(8080);
        assert_eq!(options.bind_address(), "0.0.0.0:8080");
        assert_eq!(ServerOptions::default().bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_generator_options_builder() {
        let options = GeneratorOptions::new()
            .endpoint("http://localhost:11434/v1/chat/completions")
            .model("llama3")
            .api_key("secret")
            .timeout(Duration::from_secs(5));

        assert_eq!(options.endpoint, "http://localhost:11434/v1/chat/completions");
        assert_eq!(options.model, "llama3");
        assert_eq!(options.api_key.as_deref(), Some("secret"));
        assert_eq!(options.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_generator_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.endpoint, DEFAULT_GENERATOR_ENDPOINT);
        assert!(options.api_key.is_none());
    }
}
