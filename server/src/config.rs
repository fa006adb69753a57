use std::env::VarError;
use std::net::{IpAddr, SocketAddr};

use error_stack::{Report, ResultExt};
use kernel::KernelError;

static SERVER_HOST: &str = "SERVER_HOST";
static PORT: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Reads `SERVER_HOST` and `PORT`, honouring a `.env` file.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let host = optional(SERVER_HOST, dotenvy::var(SERVER_HOST))?;
        let port = optional(PORT, dotenvy::var(PORT))?;
        Self::from_values(host.as_deref(), port.as_deref())
    }

    fn from_values(host: Option<&str>, port: Option<&str>) -> error_stack::Result<Self, KernelError> {
        let host = host.unwrap_or(DEFAULT_HOST);
        let ip = host
            .parse::<IpAddr>()
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("{SERVER_HOST}={host} is not an IP address"))?;
        let port = port.unwrap_or(DEFAULT_PORT);
        let port = port
            .parse::<u16>()
            .change_context(KernelError::Internal)
            .attach_printable_lazy(|| format!("{PORT}={port} is not a port number"))?;
        Ok(Self {
            bind: SocketAddr::new(ip, port),
        })
    }
}

/// An unset variable falls back to its default; any other failure is reported.
fn optional(
    key: &str,
    value: Result<String, dotenvy::Error>,
) -> error_stack::Result<Option<String>, KernelError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(error) => Err(Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("{key} is not usable"))),
    }
}
