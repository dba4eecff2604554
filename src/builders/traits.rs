//! # 构建器 trait 模块
//!
//! 祖先层级的设置方法以 trait 默认方法的形式提供，返回值统一为 `Self`。
//! 因此无论先调用哪一层的设置方法，链条的类型始终是最终的具体构建器，
//! 最终的 `build()` 也总是产出最具体的通信类型

use crate::communication::{BaseFields, Communication, NetworkFields};
use crate::error::CommResult;
use crate::types::{Consumer, SharedConsumer};
use std::sync::Arc;

/// 所有通信构建器的公共契约
///
/// 实现者只需要暴露自己持有的基础字段并实现 `build`，
/// `name` / `consumer` 等设置方法自动获得
pub trait CommunicationBuilder: Sized {
    /// 构建产物
    type Target: Communication + 'static;

    /// 基础字段的可变引用
    fn base_fields_mut(&mut self) -> &mut BaseFields;

    /// 设置通信名称
    ///
    /// # 参数
    ///
    /// * `name` - 通信名称
    fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.base_fields_mut().name = Some(name.into());
        self
    }

    /// 设置消息消费者
    ///
    /// # 参数
    ///
    /// * `consumer` - 消费者，闭包需标注参数类型 `|bytes: &[u8]|`
    fn consumer<C: Consumer + 'static>(self, consumer: C) -> Self {
        self.shared_consumer(Arc::new(consumer))
    }

    /// 设置已共享的消息消费者
    ///
    /// # 参数
    ///
    /// * `consumer` - 共享消费者句柄
    fn shared_consumer(mut self, consumer: SharedConsumer) -> Self {
        self.base_fields_mut().consumer = Some(consumer);
        self
    }

    /// 构建通信实例，构建器随之被消耗
    fn build(self) -> CommResult<Self::Target>;

    /// 构建并装箱为 trait 对象
    fn build_boxed(self) -> CommResult<Box<dyn Communication>> {
        Ok(Box::new(self.build()?))
    }
}

/// 网络类通信构建器的公共契约
pub trait NetworkBuilder: CommunicationBuilder {
    /// 网络字段的可变引用
    fn network_fields_mut(&mut self) -> &mut NetworkFields;

    /// 设置主机地址
    ///
    /// # 参数
    ///
    /// * `host` - 主机地址，IP 或可解析的主机名
    fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.network_fields_mut().host = Some(host.into());
        self
    }

    /// 设置端口
    ///
    /// # 参数
    ///
    /// * `port` - 端口号，0 表示由系统分配
    fn port(mut self, port: u16) -> Self {
        self.network_fields_mut().port = Some(port);
        self
    }
}
