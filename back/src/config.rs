use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// Command-line and environment configuration for the `tick` server.
#[derive(Clone, Debug, Parser)]
#[command(name = "tick", version, about = "In-memory to-do list API")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "TICK_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Value of `Access-Control-Allow-Origin`.
    #[arg(long, env = "TICK_CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,

    /// Start with a few demo todos instead of an empty list.
    #[arg(long, env = "TICK_SEED")]
    pub seed: bool,

    /// Default log filter, overridden by `RUST_LOG`.
    #[arg(long, env = "TICK_LOG", default_value = "info")]
    pub log_level: String,

    /// PEM certificate; serving HTTPS requires `--tls-key` as well.
    #[arg(long, env = "SSL_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "SSL_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn tls(&self) -> Option<(&PathBuf, &PathBuf)> {
        self.tls_cert.as_ref().zip(self.tls_key.as_ref())
    }
}
