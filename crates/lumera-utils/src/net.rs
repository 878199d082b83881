use listenfd::ListenFd;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Host and port given on the command line, either may be missing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ListenAddress {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ListenAddress {
    /// Nothing was configured, a socket passed in by the service manager may be used.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.host.is_none() && self.port.is_none()
    }

    #[must_use]
    pub fn resolve(&self, default: SocketAddr) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or_else(|| default.ip()),
            self.port.unwrap_or_else(|| default.port()),
        )
    }
}

/// Takes over the first socket from `LISTEN_FDS` when no address was configured, binds otherwise.
pub async fn create_listener(address: ListenAddress, default: SocketAddr) -> io::Result<TcpListener> {
    if address.is_unset() {
        let mut listenfd = ListenFd::from_env();
        if let Some(listener) = listenfd.take_tcp_listener(0)? {
            listener.set_nonblocking(true)?;
            tracing::debug!("using socket from listenfd");
            return TcpListener::from_std(listener);
        }
    }

    let address = address.resolve(default);
    tracing::debug!(%address, "binding listener");
    TcpListener::bind(address).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const DEFAULT: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3030);

    #[test]
    fn test_resolve_fills_missing_parts() {
        assert_eq!(ListenAddress::default().resolve(DEFAULT), DEFAULT);
        let port_only = ListenAddress {
            host: None,
            port: Some(8080),
        };
        assert!(!port_only.is_unset());
        assert_eq!(port_only.resolve(DEFAULT), SocketAddr::from(([127, 0, 0, 1], 8080)));
        let host_only = ListenAddress {
            host: Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: None,
        };
        assert_eq!(host_only.resolve(DEFAULT), SocketAddr::from(([0, 0, 0, 0], 3030)));
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let address = ListenAddress {
            host: Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            port: Some(0),
        };
        let listener = create_listener(address, DEFAULT).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
