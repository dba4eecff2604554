//! # 内存通信构建器模块

use super::traits::CommunicationBuilder;
use crate::communication::{BaseFields, InMemoryCommunication};
use crate::error::CommResult;
use rat_logger::info;

/// 内存通信构建器
#[derive(Debug)]
pub struct InMemoryCommunicationBuilder {
    base: BaseFields,
    memory_buffer_size: Option<usize>,
}

impl InMemoryCommunication {
    /// 创建内存通信构建器
    pub fn builder() -> InMemoryCommunicationBuilder {
        InMemoryCommunicationBuilder::new()
    }
}

impl InMemoryCommunicationBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            base: BaseFields::default(),
            memory_buffer_size: None,
        }
    }

    /// 设置缓冲区容量
    ///
    /// # 参数
    ///
    /// * `memory_buffer_size` - 单条消息允许的最大字节数
    pub fn memory_buffer_size(mut self, memory_buffer_size: usize) -> Self {
        self.memory_buffer_size = Some(memory_buffer_size);
        self
    }
}

impl CommunicationBuilder for InMemoryCommunicationBuilder {
    type Target = InMemoryCommunication;

    fn base_fields_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    /// 构建内存通信
    ///
    /// # 错误
    ///
    /// 名称或缓冲区容量未设置时返回配置错误
    fn build(self) -> CommResult<InMemoryCommunication> {
        let memory_buffer_size = self
            .memory_buffer_size
            .ok_or_else(|| crate::comm_error!(config, "缓冲区容量必须设置"))?;
        let base = self.base.freeze()?;

        info!("创建内存通信: 名称={}, 缓冲区={}字节", base.name(), memory_buffer_size);

        Ok(InMemoryCommunication::from_parts(base, memory_buffer_size))
    }
}

impl Default for InMemoryCommunicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
