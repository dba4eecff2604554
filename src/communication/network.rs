//! 网络通信
//!
//! 构建时根据 host/port 创建并绑定一个 TCP 套接字，实例独占该套接字直到 `close`

use super::{BaseSettings, Communication};
use crate::error::{CommError, CommResult};
use crate::types::{CommunicationKind, SharedConsumer};
use parking_lot::Mutex;
use rat_logger::{error, info};
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use tokio::net::TcpSocket;

/// 构建过程中累积的网络字段
#[derive(Debug, Default, Clone)]
pub struct NetworkFields {
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
}

impl NetworkFields {
    /// 网络层的准备步骤：校验字段、解析地址并绑定套接字
    ///
    /// 只产出冻结后的端点，不创建任何通信实例，
    /// 因此派生类型可以先执行这一步，再一次性完成自身的实例化
    ///
    /// # 错误
    ///
    /// * 字段缺失或为空时返回配置错误
    /// * 地址解析、套接字创建或绑定失败时返回 `ConstructionFailed`
    pub(crate) fn prepare(self) -> CommResult<NetworkEndpoint> {
        let host = self
            .host
            .ok_or_else(|| crate::comm_error!(config, "主机地址必须设置"))?;
        let port = self
            .port
            .ok_or_else(|| crate::comm_error!(config, "端口必须设置"))?;

        if host.trim().is_empty() {
            return Err(crate::comm_error!(config, "主机地址不能为空"));
        }

        let (socket, local_addr) = match Self::bind(&host, port) {
            Ok(bound) => bound,
            Err(e) => {
                error!("绑定套接字失败: {}:{}, 错误={}", host, port, e);
                let message = crate::i18n::tf(
                    "error.construction_failed",
                    &[
                        ("host", host.as_str()),
                        ("port", port.to_string().as_str()),
                        ("message", e.to_string().as_str()),
                    ],
                );
                return Err(CommError::ConstructionFailed { host, port, message });
            }
        };

        info!("套接字绑定成功: {}:{} -> {}", host, port, local_addr);

        Ok(NetworkEndpoint {
            host,
            port,
            local_addr,
            socket: Mutex::new(Some(socket)),
        })
    }

    fn bind(host: &str, port: u16) -> std::io::Result<(TcpSocket, SocketAddr)> {
        let addr = (host, port).to_socket_addrs()?.next().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrNotAvailable,
                format!("无法解析地址 {}:{}", host, port),
            )
        })?;

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.bind(addr)?;
        let local_addr = socket.local_addr()?;

        Ok((socket, local_addr))
    }
}

/// 已绑定的网络端点
pub struct NetworkEndpoint {
    host: String,
    port: u16,
    local_addr: SocketAddr,
    socket: Mutex<Option<TcpSocket>>,
}

impl fmt::Debug for NetworkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkEndpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("local_addr", &self.local_addr)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl NetworkEndpoint {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_connected(&self) -> bool {
        self.socket.lock().is_some()
    }

    /// 在持有套接字期间访问它，已释放时返回 `None`
    pub fn with_socket<R>(&self, f: impl FnOnce(&TcpSocket) -> R) -> Option<R> {
        self.socket.lock().as_ref().map(f)
    }

    /// 释放套接字，只能成功一次
    fn release(&self, name: &str) -> CommResult<()> {
        let socket = self.socket.lock().take().ok_or_else(|| CommError::ResourceRelease {
            message: crate::i18n::tf(
                "error.resource_release",
                &[("name", name), ("message", "套接字未建立或已释放")],
            ),
        })?;
        drop(socket);

        info!("套接字已释放: 通信={}, 地址={}", name, self.local_addr);
        Ok(())
    }
}

/// 网络通信
#[derive(Debug)]
pub struct NetworkCommunication {
    base: BaseSettings,
    endpoint: NetworkEndpoint,
}

impl NetworkCommunication {
    pub(crate) fn from_parts(base: BaseSettings, endpoint: NetworkEndpoint) -> Self {
        Self { base, endpoint }
    }

    /// 构建时设置的主机地址
    pub fn host(&self) -> &str {
        self.endpoint.host()
    }

    /// 构建时设置的端口
    pub fn port(&self) -> u16 {
        self.endpoint.port()
    }

    /// 实际绑定的本地地址（端口为 0 时由系统分配）
    pub fn local_addr(&self) -> SocketAddr {
        self.endpoint.local_addr()
    }

    /// 套接字是否仍被持有
    pub fn is_connected(&self) -> bool {
        self.endpoint.is_connected()
    }

    /// 访问构建时绑定的套接字，已关闭时返回 `None`
    pub fn with_socket<R>(&self, f: impl FnOnce(&TcpSocket) -> R) -> Option<R> {
        self.endpoint.with_socket(f)
    }

    pub fn endpoint(&self) -> &NetworkEndpoint {
        &self.endpoint
    }
}

impl AsRef<NetworkCommunication> for NetworkCommunication {
    fn as_ref(&self) -> &NetworkCommunication {
        self
    }
}

impl Communication for NetworkCommunication {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn consumer(&self) -> Option<&SharedConsumer> {
        self.base.consumer()
    }

    fn kind(&self) -> CommunicationKind {
        CommunicationKind::Network
    }

    fn send(&self, bytes: &[u8]) -> CommResult<()> {
        if !self.is_connected() {
            return Err(crate::comm_error!(not_connected, self.name()));
        }
        // 不做实际传输
        crate::debug_log!("网络发送(占位): 通信={}, {}字节", self.name(), bytes.len());
        Ok(())
    }

    fn close(&self) -> CommResult<()> {
        self.endpoint.release(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(host: &str, port: u16) -> NetworkFields {
        NetworkFields {
            host: Some(host.to_string()),
            port: Some(port),
        }
    }

    #[test]
    fn test_prepare_binds_ephemeral_port() {
        crate::init();
        let endpoint = fields("127.0.0.1", 0).prepare().unwrap();

        assert_eq!(endpoint.host(), "127.0.0.1");
        assert_eq!(endpoint.port(), 0);
        assert_ne!(endpoint.local_addr().port(), 0);
        assert!(endpoint.is_connected());
    }

    #[test]
    fn test_prepare_requires_host_and_port() {
        crate::init();
        let missing_port = NetworkFields {
            host: Some("127.0.0.1".to_string()),
            port: None,
        };
        assert!(matches!(missing_port.prepare(), Err(CommError::ConfigError { .. })));

        let missing_host = NetworkFields {
            host: None,
            port: Some(0),
        };
        assert!(matches!(missing_host.prepare(), Err(CommError::ConfigError { .. })));
    }

    #[test]
    fn test_prepare_reports_unbindable_address() {
        crate::init();
        // 192.0.2.0/24 为文档保留网段，不会分配给本机网卡
        let err = fields("192.0.2.1", 40000).prepare().unwrap_err();
        match err {
            CommError::ConstructionFailed { host, port, .. } => {
                assert_eq!(host, "192.0.2.1");
                assert_eq!(port, 40000);
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_release_only_once() {
        crate::init();
        let endpoint = fields("127.0.0.1", 0).prepare().unwrap();

        let bound = endpoint.with_socket(|socket| socket.local_addr().unwrap());
        assert_eq!(bound, Some(endpoint.local_addr()));

        endpoint.release("net").unwrap();
        assert!(!endpoint.is_connected());
        assert!(endpoint.with_socket(|_| ()).is_none());
        assert!(matches!(endpoint.release("net"), Err(CommError::ResourceRelease { .. })));
    }
}
