//! # 网络通信构建器模块

use super::traits::{CommunicationBuilder, NetworkBuilder};
use crate::communication::{BaseFields, BaseSettings, NetworkCommunication, NetworkEndpoint, NetworkFields};
use crate::error::CommResult;
use rat_logger::info;

/// 网络通信构建器
#[derive(Debug, Default)]
pub struct NetworkCommunicationBuilder {
    base: BaseFields,
    network: NetworkFields,
}

impl NetworkCommunication {
    /// 创建网络通信构建器
    pub fn builder() -> NetworkCommunicationBuilder {
        NetworkCommunicationBuilder::new()
    }
}

impl NetworkCommunicationBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            base: BaseFields::default(),
            network: NetworkFields::default(),
        }
    }

    /// 网络层准备步骤：冻结基础字段并绑定套接字
    ///
    /// 派生层级的构建器先调用这一步，再一次性实例化自身
    pub(crate) fn prepare(self) -> CommResult<(BaseSettings, NetworkEndpoint)> {
        let base = self.base.freeze()?;
        let endpoint = self.network.prepare()?;
        Ok((base, endpoint))
    }
}

impl CommunicationBuilder for NetworkCommunicationBuilder {
    type Target = NetworkCommunication;

    fn base_fields_mut(&mut self) -> &mut BaseFields {
        &mut self.base
    }

    /// 构建网络通信
    ///
    /// # 错误
    ///
    /// * 名称、主机或端口未设置时返回配置错误
    /// * 套接字创建或绑定失败时返回 `ConstructionFailed`
    fn build(self) -> CommResult<NetworkCommunication> {
        let (base, endpoint) = self.prepare()?;

        info!(
            "创建网络通信: 名称={}, 地址={}:{}",
            base.name(),
            endpoint.host(),
            endpoint.port()
        );

        Ok(NetworkCommunication::from_parts(base, endpoint))
    }
}

impl NetworkBuilder for NetworkCommunicationBuilder {
    fn network_fields_mut(&mut self) -> &mut NetworkFields {
        &mut self.network
    }
}
