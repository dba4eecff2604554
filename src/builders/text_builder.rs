//! # 文本通信构建器模块
//!
//! 复用网络通信构建器的字段与准备步骤，只额外持有字符集

use super::network_builder::NetworkCommunicationBuilder;
use super::traits::{CommunicationBuilder, NetworkBuilder};
use crate::communication::{
    BaseFields, CharsetSetting, NetworkCommunication, NetworkFields, TextCommunication,
};
use crate::error::CommResult;
use encoding_rs::Encoding;
use rat_logger::info;

/// 文本通信构建器
#[derive(Debug)]
pub struct TextCommunicationBuilder {
    network: NetworkCommunicationBuilder,
    charset: Option<CharsetSetting>,
}

impl TextCommunication {
    /// 创建文本通信构建器
    pub fn builder() -> TextCommunicationBuilder {
        TextCommunicationBuilder::new()
    }
}

impl TextCommunicationBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self {
            network: NetworkCommunicationBuilder::new(),
            charset: None,
        }
    }

    /// 设置字符集
    ///
    /// # 参数
    ///
    /// * `charset` - 字符集，如 `encoding_rs::UTF_8`
    pub fn charset(mut self, charset: &'static Encoding) -> Self {
        self.charset = Some(CharsetSetting::Encoding(charset));
        self
    }

    /// 按标签设置字符集，构建时解析
    ///
    /// # 参数
    ///
    /// * `label` - 字符集标签，如 "UTF-8"、"GBK"
    pub fn charset_label<S: Into<String>>(mut self, label: S) -> Self {
        self.charset = Some(CharsetSetting::Label(label.into()));
        self
    }
}

impl CommunicationBuilder for TextCommunicationBuilder {
    type Target = TextCommunication;

    fn base_fields_mut(&mut self) -> &mut BaseFields {
        self.network.base_fields_mut()
    }

    /// 构建文本通信
    ///
    /// 先解析字符集，再执行网络层的准备步骤，最后只实例化一次
    ///
    /// # 错误
    ///
    /// * 字符集未设置或无法识别时返回配置错误
    /// * 网络层准备失败时原样返回其错误
    fn build(self) -> CommResult<TextCommunication> {
        let charset = self
            .charset
            .ok_or_else(|| crate::comm_error!(config, "字符集必须设置"))?
            .resolve()?;
        let (base, endpoint) = self.network.prepare()?;

        info!(
            "创建文本通信: 名称={}, 地址={}:{}, 字符集={}",
            base.name(),
            endpoint.host(),
            endpoint.port(),
            charset.name()
        );

        let network = NetworkCommunication::from_parts(base, endpoint);
        Ok(TextCommunication::from_parts(network, charset))
    }
}

impl NetworkBuilder for TextCommunicationBuilder {
    fn network_fields_mut(&mut self) -> &mut NetworkFields {
        self.network.network_fields_mut()
    }
}

impl Default for TextCommunicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
