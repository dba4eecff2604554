//! # 配置管理模块
//!
//! 以声明式配置（TOML/JSON）描述通信组件，最终仍经由对应的构建器创建，
//! 所有校验规则与链式构建完全一致

pub mod convenience;
pub mod core;

pub use convenience::{create_communication, in_memory_config, network_config, text_config};
pub use core::CommunicationConfig;
