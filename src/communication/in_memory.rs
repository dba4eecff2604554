//! 内存通信
//!
//! 同步地把消息直接投递给消费者，没有任何外部资源

use super::{BaseSettings, Communication};
use crate::error::{CommError, CommResult};
use crate::types::{CommunicationKind, SharedConsumer};
use rat_logger::warn;

/// 内存通信
#[derive(Debug)]
pub struct InMemoryCommunication {
    base: BaseSettings,
    memory_buffer_size: usize,
}

impl InMemoryCommunication {
    pub(crate) fn from_parts(base: BaseSettings, memory_buffer_size: usize) -> Self {
        Self {
            base,
            memory_buffer_size,
        }
    }

    /// 缓冲区容量（字节）
    pub fn memory_buffer_size(&self) -> usize {
        self.memory_buffer_size
    }
}

impl Communication for InMemoryCommunication {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn consumer(&self) -> Option<&SharedConsumer> {
        self.base.consumer()
    }

    fn kind(&self) -> CommunicationKind {
        CommunicationKind::InMemory
    }

    fn send(&self, bytes: &[u8]) -> CommResult<()> {
        if bytes.len() > self.memory_buffer_size {
            warn!(
                "消息超出缓冲区: 通信={}, 消息={}字节, 容量={}字节",
                self.name(),
                bytes.len(),
                self.memory_buffer_size
            );
            return Err(CommError::MessageTooLarge {
                size: bytes.len(),
                capacity: self.memory_buffer_size,
                message: crate::i18n::tf(
                    "error.message_too_large",
                    &[
                        ("name", self.name()),
                        ("size", bytes.len().to_string().as_str()),
                        ("capacity", self.memory_buffer_size.to_string().as_str()),
                    ],
                ),
            });
        }

        let consumer = self
            .consumer()
            .ok_or_else(|| crate::comm_error!(consumer_missing, self.name()))?;

        crate::debug_log!("内存投递: 通信={}, {}字节", self.name(), bytes.len());
        consumer.handle_delivery(bytes);
        Ok(())
    }

    fn close(&self) -> CommResult<()> {
        // 无外部资源
        Ok(())
    }
}
