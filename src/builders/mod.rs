//! # 通信构建器模块
//!
//! 提供所有通信类型的构建器实现，支持任意顺序的链式调用和严格验证

pub mod in_memory_builder;
pub mod network_builder;
pub mod text_builder;
pub mod traits;

pub use in_memory_builder::InMemoryCommunicationBuilder;
pub use network_builder::NetworkCommunicationBuilder;
pub use text_builder::TextCommunicationBuilder;
pub use traits::{CommunicationBuilder, NetworkBuilder};
