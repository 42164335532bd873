use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Listener, logging and admin access (`[basic]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// TOML: `basic.listen_addr`. Default: `0.0.0.0`.
    #[serde(default = "default_listen_ip")]
    pub listen_addr: IpAddr,

    /// TOML: `basic.listen_port`. Default: `8188`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Default tracing filter; `RUST_LOG` overrides it.
    /// TOML: `basic.loglevel`. Default: `info`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Key guarding the edit API and the refresh hooks. A purely numeric key
    /// written unquoted in TOML is accepted.
    /// TOML: `basic.admin_key`. Must be provided.
    #[serde(default, with = "lax_key")]
    pub admin_key: String,
}

impl BasicConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.listen_port)
    }
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_ip(),
            listen_port: default_listen_port(),
            loglevel: default_loglevel(),
            admin_key: String::new(),
        }
    }
}

mod lax_key {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawKey {
        Text(String),
        Integer(i64),
    }

    pub fn serialize<S: Serializer>(key: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match RawKey::deserialize(deserializer) {
            Ok(RawKey::Text(s)) => Ok(s),
            Ok(RawKey::Integer(n)) => Ok(n.to_string()),
            Err(_) => Err(serde::de::Error::custom(
                "basic.admin_key must be a string or an integer",
            )),
        }
    }
}

fn default_listen_ip() -> IpAddr {
    Ipv4Addr::UNSPECIFIED.into()
}

fn default_listen_port() -> u16 {
    8188
}

fn default_loglevel() -> String {
    "info".to_string()
}
