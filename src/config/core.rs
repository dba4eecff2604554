//! # 配置管理模块 - 核心配置类型
//!
//! 每种通信类型对应一个配置变体，以 `kind` 字段区分

use crate::error::{CommError, CommResult};
use crate::types::CommunicationKind;
use rat_logger::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 通信组件配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommunicationConfig {
    /// 内存通信
    InMemory {
        name: String,
        memory_buffer_size: usize,
    },
    /// 网络通信
    Network {
        name: String,
        host: String,
        port: u16,
    },
    /// 基于文本的网络通信
    Text {
        name: String,
        host: String,
        port: u16,
        /// 字符集标签
        charset: String,
    },
}

impl CommunicationConfig {
    /// 通信名称
    pub fn name(&self) -> &str {
        match self {
            CommunicationConfig::InMemory { name, .. }
            | CommunicationConfig::Network { name, .. }
            | CommunicationConfig::Text { name, .. } => name,
        }
    }

    /// 配置对应的通信类型
    pub fn kind(&self) -> CommunicationKind {
        match self {
            CommunicationConfig::InMemory { .. } => CommunicationKind::InMemory,
            CommunicationConfig::Network { .. } => CommunicationKind::Network,
            CommunicationConfig::Text { .. } => CommunicationKind::Text,
        }
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> CommResult<Self> {
        toml::from_str(content)
            .map_err(|e| crate::comm_error!(serialization, format!("解析TOML配置失败: {}", e)))
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(content: &str) -> CommResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| crate::comm_error!(serialization, format!("解析JSON配置失败: {}", e)))
    }

    /// 从配置文件加载配置
    ///
    /// 扩展名为 `toml` 时按 TOML 解析，其余按 JSON 解析
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn from_file<P: AsRef<Path>>(config_path: P) -> CommResult<Self> {
        let content = std::fs::read_to_string(config_path.as_ref()).map_err(CommError::IoError)?;

        let config = if is_toml(config_path.as_ref()) {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };

        info!("从文件加载通信配置: {:?}, 名称={}", config_path.as_ref(), config.name());
        Ok(config)
    }

    /// 保存配置到文件
    ///
    /// # 参数
    ///
    /// * `config_path` - 配置文件路径
    pub fn save_to_file<P: AsRef<Path>>(&self, config_path: P) -> CommResult<()> {
        let content = if is_toml(config_path.as_ref()) {
            toml::to_string_pretty(self)
                .map_err(|e| crate::comm_error!(serialization, format!("序列化TOML配置失败: {}", e)))?
        } else {
            serde_json::to_string_pretty(self)
                .map_err(|e| crate::comm_error!(serialization, format!("序列化JSON配置失败: {}", e)))?
        };

        std::fs::write(config_path.as_ref(), content).map_err(CommError::IoError)?;

        info!("保存通信配置到文件: {:?}", config_path.as_ref());
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}
