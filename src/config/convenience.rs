//! # 便利配置函数模块
//!
//! 提供常用通信配置的便利函数，以及按配置创建通信实例的工厂函数

use super::core::CommunicationConfig;
use crate::builders::{
    CommunicationBuilder, InMemoryCommunicationBuilder, NetworkBuilder,
    NetworkCommunicationBuilder, TextCommunicationBuilder,
};
use crate::communication::Communication;
use crate::error::CommResult;
use crate::types::SharedConsumer;
use rat_logger::info;

/// 创建内存通信配置
pub fn in_memory_config<S: Into<String>>(name: S, memory_buffer_size: usize) -> CommunicationConfig {
    CommunicationConfig::InMemory {
        name: name.into(),
        memory_buffer_size,
    }
}

/// 创建网络通信配置
pub fn network_config<S: Into<String>, H: Into<String>>(name: S, host: H, port: u16) -> CommunicationConfig {
    CommunicationConfig::Network {
        name: name.into(),
        host: host.into(),
        port,
    }
}

/// 创建文本通信配置
///
/// # 参数
///
/// * `charset` - 字符集标签，如 "UTF-8"
pub fn text_config<S: Into<String>, H: Into<String>, C: Into<String>>(
    name: S,
    host: H,
    port: u16,
    charset: C,
) -> CommunicationConfig {
    CommunicationConfig::Text {
        name: name.into(),
        host: host.into(),
        port,
        charset: charset.into(),
    }
}

/// 根据配置创建通信实例
///
/// 配置被转换为对应的构建器调用，校验与构建过程和手写链式调用完全一致
///
/// # 参数
///
/// * `config` - 通信配置
/// * `consumer` - 可选的消息消费者
pub fn create_communication(
    config: CommunicationConfig,
    consumer: Option<SharedConsumer>,
) -> CommResult<Box<dyn Communication>> {
    info!("按配置创建通信: 名称={}, 类型={}", config.name(), config.kind());

    match config {
        CommunicationConfig::InMemory {
            name,
            memory_buffer_size,
        } => with_consumer(InMemoryCommunicationBuilder::new(), consumer)
            .name(name)
            .memory_buffer_size(memory_buffer_size)
            .build_boxed(),
        CommunicationConfig::Network { name, host, port } => {
            with_consumer(NetworkCommunicationBuilder::new(), consumer)
                .name(name)
                .host(host)
                .port(port)
                .build_boxed()
        }
        CommunicationConfig::Text {
            name,
            host,
            port,
            charset,
        } => with_consumer(TextCommunicationBuilder::new(), consumer)
            .name(name)
            .host(host)
            .port(port)
            .charset_label(charset)
            .build_boxed(),
    }
}

fn with_consumer<B: CommunicationBuilder>(builder: B, consumer: Option<SharedConsumer>) -> B {
    match consumer {
        Some(consumer) => builder.shared_consumer(consumer),
        None => builder,
    }
}
