//! rat_communication - 多级继承通信组件库
//!
//! 演示构建器模式在多级类型层次中的扩展：
//! 内存通信、网络通信、基于文本的网络通信共享基础字段，
//! 链式设置方法在任意调用顺序下都保持最具体的构建器类型
//!
//! ```no_run
//! use rat_communication::prelude::*;
//!
//! # fn main() -> rat_communication::CommResult<()> {
//! rat_communication::init();
//!
//! let comm = TextCommunication::builder()
//!     .charset_label("UTF-8")
//!     .host("127.0.0.1")
//!     .port(12346)
//!     .name("TestCommunication")
//!     .build()?;
//!
//! comm.send_text("你好")?;
//! comm.close()?;
//! # Ok(())
//! # }
//! ```

// 导出所有公共模块
pub mod error;
pub mod types;
pub mod communication;
pub mod builders;
pub mod config;
pub mod i18n;

// 重新导出常用类型和函数
pub use error::{CommError, CommResult};
pub use types::{CommunicationKind, Consumer, SharedConsumer};
pub use communication::{
    Communication, InMemoryCommunication, NetworkCommunication, TextCommunication,
};
pub use builders::{
    CommunicationBuilder, InMemoryCommunicationBuilder, NetworkBuilder,
    NetworkCommunicationBuilder, TextCommunicationBuilder,
};
pub use config::{
    CommunicationConfig, create_communication, in_memory_config, network_config, text_config,
};

/// 常用导入
///
/// 构建器的设置方法来自 trait，使用链式调用前需要把 trait 引入作用域
pub mod prelude {
    pub use crate::builders::{CommunicationBuilder, NetworkBuilder};
    pub use crate::communication::{
        Communication, InMemoryCommunication, NetworkCommunication, TextCommunication,
    };
    pub use crate::error::{CommError, CommResult};
    pub use crate::types::{CommunicationKind, Consumer, SharedConsumer};
}

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_communication库
///
/// 注册多语言错误消息，可重复调用
///
/// 注意：日志系统由调用者自行初始化
pub fn init() {
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
