//! 公共类型定义模块
//!
//! 消息消费者与通信类型标识

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 消息消费者
///
/// 由外部提供，通信组件只负责把字节负载交给它，不关心其处理语义
pub trait Consumer: Send + Sync {
    /// 处理一次投递
    fn handle_delivery(&self, bytes: &[u8]);
}

impl<F> Consumer for F
where
    F: Fn(&[u8]) + Send + Sync,
{
    fn handle_delivery(&self, bytes: &[u8]) {
        self(bytes)
    }
}

/// 可共享的消费者句柄
pub type SharedConsumer = Arc<dyn Consumer>;

/// 通信组件的具体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationKind {
    /// 内存通信
    InMemory,
    /// 网络通信
    Network,
    /// 基于文本的网络通信
    Text,
}

impl fmt::Display for CommunicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommunicationKind::InMemory => "in_memory",
            CommunicationKind::Network => "network",
            CommunicationKind::Text => "text",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_closure_is_consumer() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let consumer: SharedConsumer = Arc::new(move |bytes: &[u8]| sink.lock().extend_from_slice(bytes));

        consumer.handle_delivery(b"abc");
        consumer.handle_delivery(b"de");

        assert_eq!(received.lock().as_slice(), b"abcde");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&CommunicationKind::InMemory).unwrap();
        assert_eq!(json, "\"in_memory\"");
        assert_eq!(CommunicationKind::Text.to_string(), "text");
    }
}
