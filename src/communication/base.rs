//! 各通信类型共享的基础字段

use crate::error::CommResult;
use crate::types::SharedConsumer;
use std::fmt;

/// 构建过程中累积的基础字段
///
/// 每个具体构建器都持有一份，并通过 `CommunicationBuilder` 暴露给链式设置方法
#[derive(Default, Clone)]
pub struct BaseFields {
    pub(crate) name: Option<String>,
    pub(crate) consumer: Option<SharedConsumer>,
}

impl fmt::Debug for BaseFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseFields")
            .field("name", &self.name)
            .field("consumer", &self.consumer.as_ref().map(|_| "<consumer>"))
            .finish()
    }
}

impl BaseFields {
    /// 校验并冻结基础字段
    ///
    /// # 错误
    ///
    /// 名称未设置或为空时返回配置错误
    pub(crate) fn freeze(self) -> CommResult<BaseSettings> {
        let name = self
            .name
            .ok_or_else(|| crate::comm_error!(config, "通信名称必须设置"))?;

        if name.trim().is_empty() {
            return Err(crate::comm_error!(config, "通信名称不能为空"));
        }

        Ok(BaseSettings {
            name,
            consumer: self.consumer,
        })
    }
}

/// 冻结后的基础字段
#[derive(Clone)]
pub struct BaseSettings {
    name: String,
    consumer: Option<SharedConsumer>,
}

impl fmt::Debug for BaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSettings")
            .field("name", &self.name)
            .field("consumer", &self.consumer.as_ref().map(|_| "<consumer>"))
            .finish()
    }
}

impl BaseSettings {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn consumer(&self) -> Option<&SharedConsumer> {
        self.consumer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommError;
    use std::sync::Arc;

    #[test]
    fn test_freeze_requires_name() {
        let err = BaseFields::default().freeze().unwrap_err();
        assert!(matches!(err, CommError::ConfigError { .. }));
    }

    #[test]
    fn test_freeze_rejects_blank_name() {
        let fields = BaseFields {
            name: Some("   ".to_string()),
            consumer: None,
        };
        assert!(matches!(fields.freeze(), Err(CommError::ConfigError { .. })));
    }

    #[test]
    fn test_freeze_keeps_consumer_identity() {
        let consumer: SharedConsumer = Arc::new(|_: &[u8]| {});
        let fields = BaseFields {
            name: Some("base".to_string()),
            consumer: Some(consumer.clone()),
        };

        let settings = fields.freeze().unwrap();

        assert_eq!(settings.name(), "base");
        assert!(Arc::ptr_eq(settings.consumer().unwrap(), &consumer));
    }
}
