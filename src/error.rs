//! 错误类型定义模块
//!
//! 所有错误消息在构造时通过 i18n 模块完成本地化，
//! 结构化字段保留给调用方做模式匹配

use thiserror::Error;

/// 通信组件统一错误类型
#[derive(Error, Debug)]
pub enum CommError {
    /// 消息超出内存缓冲区容量
    #[error("{message}")]
    MessageTooLarge {
        size: usize,
        capacity: usize,
        message: String,
    },

    /// 构建阶段创建或绑定连接失败
    #[error("{message}")]
    ConstructionFailed {
        host: String,
        port: u16,
        message: String,
    },

    /// 释放连接资源失败
    #[error("{message}")]
    ResourceRelease { message: String },

    /// 连接已释放，无法继续发送
    #[error("{message}")]
    NotConnected { message: String },

    /// 未注册消息消费者
    #[error("{message}")]
    ConsumerMissing { message: String },

    /// 字符集编码失败
    #[error("{message}")]
    EncodingError { charset: String, message: String },

    /// 配置错误
    #[error("{message}")]
    ConfigError { message: String },

    /// 配置序列化/反序列化错误
    #[error("{message}")]
    SerializationError { message: String },

    /// IO 错误
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),
}

/// 通信组件结果类型
pub type CommResult<T> = Result<T, CommError>;

/// 快速构建常见错误
///
/// ```ignore
/// return Err(comm_error!(config, "通信名称必须设置"));
/// ```
#[macro_export]
macro_rules! comm_error {
    (config, $msg:expr) => {
        $crate::error::CommError::ConfigError {
            message: $crate::i18n::tf("error.config", &[("message", ::std::convert::AsRef::<str>::as_ref(&$msg))]),
        }
    };
    (serialization, $msg:expr) => {
        $crate::error::CommError::SerializationError {
            message: $crate::i18n::tf("error.serialization", &[("message", ::std::convert::AsRef::<str>::as_ref(&$msg))]),
        }
    };
    (not_connected, $name:expr) => {
        $crate::error::CommError::NotConnected {
            message: $crate::i18n::tf("error.not_connected", &[("name", ::std::convert::AsRef::<str>::as_ref(&$name))]),
        }
    };
    (consumer_missing, $name:expr) => {
        $crate::error::CommError::ConsumerMissing {
            message: $crate::i18n::tf("error.consumer_missing", &[("name", ::std::convert::AsRef::<str>::as_ref(&$name))]),
        }
    };
}
