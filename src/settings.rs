//! Service configuration derived from environment variables.
//!
//! ## Environment Variables
//!
//! - `DATABASE_URL`: redb file location, optionally prefixed with `file://`
//!   or `redb://` (required)
//! - `PORT`: HTTP port (default: 4000)
//! - `HOST`: Bind address (default: :: for dual-stack IPv4/IPv6)
//! - `GUESTBOOK_BODY_LIMIT_KB`: Maximum request body size (default: 256)
//! - `GUESTBOOK_PUBLIC_DIR`: Directory holding `index.html` (default: public)
//! - `RUST_LOG`: Log level filter

use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_BODY_LIMIT_KB: usize = 256;
const DEFAULT_PUBLIC_DIR: &str = "public";
const URL_SCHEMES: [&str; 2] = ["file://", "redb://"];

fn env_trim(name: &str) -> String {
    env::var(name).unwrap_or_default().trim().to_string()
}

/// Resolve a `DATABASE_URL` value to a database file path.
pub fn database_path_from_url(url: &str) -> Option<PathBuf> {
    let url = url.trim();
    let path = URL_SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url);

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    port: u16,
    host: IpAddr,
    database_path: Option<PathBuf>,
    body_limit_bytes: usize,
    public_dir: PathBuf,
}

impl Settings {
    /// Read settings from the process environment, loading `.env` first
    /// if one exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let port = env_trim("PORT").parse::<u16>().unwrap_or(DEFAULT_PORT);
        let host = env_trim("HOST")
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V6(Ipv6Addr::UNSPECIFIED));
        let database_path = database_path_from_url(&env_trim("DATABASE_URL"));
        let body_limit_kb = env_trim("GUESTBOOK_BODY_LIMIT_KB")
            .parse::<usize>()
            .ok()
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_BODY_LIMIT_KB);
        let public_dir = Some(env_trim("GUESTBOOK_PUBLIC_DIR"))
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);

        Self {
            port,
            host,
            database_path,
            body_limit_bytes: body_limit_kb.saturating_mul(1024),
            public_dir,
        }
    }

    pub fn for_tests() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V6(Ipv6Addr::UNSPECIFIED),
            database_path: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_KB * 1024,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database_path.is_none() {
            return Err("No database URL specified in environment variables. \
Have you set up a .env file?"
                .to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.database_path.as_deref()
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_bytes
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn index_page(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }

    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    pub fn with_body_limit_bytes(mut self, bytes: usize) -> Self {
        self.body_limit_bytes = bytes;
        self
    }
}
