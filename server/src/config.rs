//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "todomvc")]
#[command(about = "Server-rendered TodoMVC with htmx partial updates")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TODOMVC_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "TODOMVC_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Titles to create at startup (repeat or comma-separate)
    #[arg(long = "seed", env = "TODOMVC_SEED", value_delimiter = ',')]
    pub seed: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
