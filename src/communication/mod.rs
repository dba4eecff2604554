//! # 通信组件模块
//!
//! 定义统一的通信接口以及三种具体实现：内存通信、网络通信、基于文本的网络通信。
//! 所有实例只能通过对应的构建器创建，创建后字段不可再修改

mod base;
mod in_memory;
mod network;
mod text;

pub use base::{BaseFields, BaseSettings};
pub use in_memory::InMemoryCommunication;
pub use network::{NetworkCommunication, NetworkEndpoint, NetworkFields};
pub use text::{CharsetSetting, TextCommunication};

use crate::error::CommResult;
use crate::types::{CommunicationKind, SharedConsumer};
use std::fmt;

/// 通信组件trait，定义统一的收发接口
pub trait Communication: fmt::Debug + Send + Sync {
    /// 通信名称
    fn name(&self) -> &str;

    /// 已注册的消息消费者
    fn consumer(&self) -> Option<&SharedConsumer>;

    /// 具体通信类型
    fn kind(&self) -> CommunicationKind;

    /// 发送字节负载
    fn send(&self, bytes: &[u8]) -> CommResult<()>;

    /// 释放通信持有的资源
    fn close(&self) -> CommResult<()>;
}
