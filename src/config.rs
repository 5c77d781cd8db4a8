use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable carrying the listen port (set by hosting platforms).
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 8080;

/// Loopback-only bind address used when no port is supplied by the environment.
pub const LOCAL_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Bind address accepting external connections.
pub const PUBLIC_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Startup configuration for the HTTP front door.
///
/// Built once before the listener starts and passed by value into
/// [`crate::graphql::run_server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: LOCAL_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads [`PORT_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Resolves the config from the raw value of [`PORT_ENV`].
    ///
    /// A non-empty value widens the host to [`PUBLIC_HOST`]. The port is taken
    /// from the value when it parses as a non-zero `u16`, otherwise
    /// [`DEFAULT_PORT`] is used.
    pub fn from_port_var(value: Option<&str>) -> Self {
        match value {
            Some(raw) if !raw.is_empty() => {
                let port = raw
                    .trim()
                    .parse::<u16>()
                    .ok()
                    .filter(|p| *p != 0)
                    .unwrap_or(DEFAULT_PORT);
                Self {
                    host: PUBLIC_HOST,
                    port,
                }
            }
            _ => Self::default(),
        }
    }

    /// Applies command-line overrides, which win over the environment.
    pub fn with_overrides(mut self, port: Option<u16>, host: Option<IpAddr>) -> Self {
        if let Some(p) = port {
            self.port = p;
        }
        if let Some(h) = host {
            self.host = h;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
