//! Server configuration parsing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use jobboard_core::QueryLimits;
use jobboard_core::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use kdl::{KdlDocument, KdlNode};
use serde::{Deserialize, Serialize};

use crate::nodes::{get_first_integer_arg, get_first_string_arg};
use crate::{ConfigError, ConfigResult};

/// Server-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub listen: SocketAddr,
    /// Page size when a request does not give one.
    pub page_size: usize,
    /// Largest page size a request may ask for.
    pub max_page_size: usize,
    /// Job feed loaded into the empty store at startup. The bundled mock
    /// postings are used when unset.
    pub seed: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn query_limits(&self) -> QueryLimits {
        QueryLimits {
            default_limit: self.page_size,
            max_limit: self.max_page_size,
        }
    }
}

/// Parse server configuration from KDL text.
///
/// ```kdl
/// server {
///     listen "0.0.0.0:3000"
/// }
/// jobs {
///     page-size 10
///     max-page-size 100
///     seed "jobs.kdl"
/// }
/// ```
pub fn parse_server_config(kdl: &str) -> ConfigResult<ServerConfig> {
    let doc: KdlDocument = kdl.parse()?;
    let mut config = ServerConfig::default();

    for node in doc.nodes() {
        let Some(children) = node.children() else {
            continue;
        };
        match node.name().value() {
            "server" => {
                for child in children.nodes() {
                    if child.name().value() == "listen" {
                        config.listen = parse_listen(child)?;
                    }
                }
            }
            "jobs" => {
                for child in children.nodes() {
                    match child.name().value() {
                        "page-size" => config.page_size = parse_size(child, "jobs page-size")?,
                        "max-page-size" => {
                            config.max_page_size = parse_size(child, "jobs max-page-size")?
                        }
                        "seed" => {
                            let path = get_first_string_arg(child).ok_or_else(|| {
                                ConfigError::MissingField("jobs seed path".to_string())
                            })?;
                            config.seed = Some(PathBuf::from(path));
                        }
                        _ => {}
                    }
                }
            }
            _ => {} // Ignore unknown nodes
        }
    }

    if config.page_size > config.max_page_size {
        return Err(ConfigError::InvalidValue {
            field: "jobs page-size".to_string(),
            message: format!(
                "{} exceeds max-page-size {}",
                config.page_size, config.max_page_size
            ),
        });
    }

    Ok(config)
}

/// Read and parse a server configuration file.
pub fn load_server_config(path: impl AsRef<Path>) -> ConfigResult<ServerConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_server_config(&content)
}

fn parse_listen(node: &KdlNode) -> ConfigResult<SocketAddr> {
    let raw = get_first_string_arg(node)
        .ok_or_else(|| ConfigError::MissingField("server listen".to_string()))?;
    raw.parse().map_err(|e| ConfigError::InvalidValue {
        field: "server listen".to_string(),
        message: format!("'{}': {}", raw, e),
    })
}

fn parse_size(node: &KdlNode, field: &str) -> ConfigResult<usize> {
    let value = get_first_integer_arg(node)
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))?;
    usize::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a positive integer, got {}", value),
        })
}
