//! 基于文本的网络通信
//!
//! 在网络通信之上增加字符集，文本按字符集编码后走网络通信的发送路径

use super::{Communication, NetworkCommunication};
use crate::error::{CommError, CommResult};
use crate::types::{CommunicationKind, SharedConsumer};
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::net::SocketAddr;
use tokio::net::TcpSocket;

/// 构建器中的字符集设置
#[derive(Debug, Clone)]
pub enum CharsetSetting {
    /// 直接给定的编码
    Encoding(&'static Encoding),
    /// 字符集标签，构建时解析，如 "UTF-8"、"GBK"
    Label(String),
}

impl CharsetSetting {
    /// 解析为可用于编码输出的字符集
    ///
    /// # 错误
    ///
    /// 标签无法识别，或该字符集只能解码（如 UTF-16）时返回配置错误
    pub(crate) fn resolve(self) -> CommResult<&'static Encoding> {
        let encoding = match self {
            CharsetSetting::Encoding(encoding) => encoding,
            CharsetSetting::Label(label) => Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| crate::comm_error!(config, format!("无法识别的字符集: {}", label)))?,
        };

        if encoding.output_encoding() != encoding {
            return Err(crate::comm_error!(
                config,
                format!("字符集 {} 不支持编码输出", encoding.name())
            ));
        }

        Ok(encoding)
    }
}

/// 基于文本的网络通信
#[derive(Debug)]
pub struct TextCommunication {
    network: NetworkCommunication,
    charset: &'static Encoding,
}

impl TextCommunication {
    pub(crate) fn from_parts(network: NetworkCommunication, charset: &'static Encoding) -> Self {
        Self { network, charset }
    }

    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    /// 网络层部分
    pub fn network(&self) -> &NetworkCommunication {
        &self.network
    }

    pub fn host(&self) -> &str {
        self.network.host()
    }

    pub fn port(&self) -> u16 {
        self.network.port()
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.network.local_addr()
    }

    pub fn is_connected(&self) -> bool {
        self.network.is_connected()
    }

    pub fn with_socket<R>(&self, f: impl FnOnce(&TcpSocket) -> R) -> Option<R> {
        self.network.with_socket(f)
    }

    /// 按字符集编码文本
    ///
    /// # 错误
    ///
    /// 文本中存在字符集无法表示的字符时返回 `EncodingError`
    pub fn encode_text<'a>(&self, text: &'a str) -> CommResult<Cow<'a, [u8]>> {
        let (bytes, _, had_errors) = self.charset.encode(text);
        if had_errors {
            return Err(self.encoding_error("文本包含字符集无法表示的字符"));
        }
        Ok(bytes)
    }

    /// 按字符集解码字节
    pub fn decode_text<'a>(&self, bytes: &'a [u8]) -> CommResult<Cow<'a, str>> {
        self.charset
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| self.encoding_error("字节序列不符合字符集"))
    }

    /// 编码后发送文本
    pub fn send_text(&self, text: &str) -> CommResult<()> {
        let bytes = self.encode_text(text)?;
        self.send(&bytes)
    }

    fn encoding_error(&self, reason: &str) -> CommError {
        CommError::EncodingError {
            charset: self.charset.name().to_string(),
            message: crate::i18n::tf(
                "error.encoding",
                &[("charset", self.charset.name()), ("message", reason)],
            ),
        }
    }
}

impl AsRef<NetworkCommunication> for TextCommunication {
    fn as_ref(&self) -> &NetworkCommunication {
        &self.network
    }
}

impl Communication for TextCommunication {
    fn name(&self) -> &str {
        self.network.name()
    }

    fn consumer(&self) -> Option<&SharedConsumer> {
        self.network.consumer()
    }

    fn kind(&self) -> CommunicationKind {
        CommunicationKind::Text
    }

    fn send(&self, bytes: &[u8]) -> CommResult<()> {
        self.network.send(bytes)
    }

    fn close(&self) -> CommResult<()> {
        self.network.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_resolution() {
        crate::init();
        let utf8 = CharsetSetting::Label("utf-8".to_string()).resolve().unwrap();
        assert_eq!(utf8.name(), "UTF-8");

        let gbk = CharsetSetting::Label(" GBK ".to_string()).resolve().unwrap();
        assert_eq!(gbk, encoding_rs::GBK);
    }

    #[test]
    fn test_unknown_label_rejected() {
        crate::init();
        let result = CharsetSetting::Label("klingon-8".to_string()).resolve();
        assert!(matches!(result, Err(CommError::ConfigError { .. })));
    }

    #[test]
    fn test_decode_only_charset_rejected() {
        crate::init();
        let result = CharsetSetting::Encoding(encoding_rs::UTF_16LE).resolve();
        assert!(matches!(result, Err(CommError::ConfigError { .. })));
    }
}
