//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误消息多语言支持

use std::collections::HashMap;
use std::sync::Once;
use rat_embed_lang::register_translations;

// 翻译只能注册一次，重复注册会因key重复而panic
static REGISTER_ONCE: Once = Once::new();

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误消息翻译
    fn register_all_translations() {
        let mut translations = HashMap::new();

        // 消息超出缓冲区
        let mut too_large_errors = HashMap::new();
        too_large_errors.insert("zh-CN".to_string(), "消息过大: {name} 的缓冲区容量为 {capacity} 字节，实际消息 {size} 字节".to_string());
        too_large_errors.insert("en-US".to_string(), "Message too big: buffer of {name} holds {capacity} bytes, got {size} bytes".to_string());
        too_large_errors.insert("ja-JP".to_string(), "メッセージが大きすぎます: {name} のバッファ容量は {capacity} バイト、受信 {size} バイト".to_string());
        translations.insert("error.message_too_large".to_string(), too_large_errors);

        // 构建时连接创建失败
        let mut construction_errors = HashMap::new();
        construction_errors.insert("zh-CN".to_string(), "创建连接失败 {host}:{port}: {message}".to_string());
        construction_errors.insert("en-US".to_string(), "Failed to establish connection {host}:{port}: {message}".to_string());
        construction_errors.insert("ja-JP".to_string(), "接続の確立に失敗しました {host}:{port}: {message}".to_string());
        translations.insert("error.construction_failed".to_string(), construction_errors);

        // 连接释放失败
        let mut release_errors = HashMap::new();
        release_errors.insert("zh-CN".to_string(), "释放连接失败 {name}: {message}".to_string());
        release_errors.insert("en-US".to_string(), "Failed to release connection {name}: {message}".to_string());
        release_errors.insert("ja-JP".to_string(), "接続の解放に失敗しました {name}: {message}".to_string());
        translations.insert("error.resource_release".to_string(), release_errors);

        // 连接已关闭
        let mut not_connected_errors = HashMap::new();
        not_connected_errors.insert("zh-CN".to_string(), "通信 {name} 的连接已关闭".to_string());
        not_connected_errors.insert("en-US".to_string(), "Connection of {name} is closed".to_string());
        not_connected_errors.insert("ja-JP".to_string(), "{name} の接続は閉じられています".to_string());
        translations.insert("error.not_connected".to_string(), not_connected_errors);

        // 缺少消费者
        let mut consumer_errors = HashMap::new();
        consumer_errors.insert("zh-CN".to_string(), "通信 {name} 未注册消息消费者".to_string());
        consumer_errors.insert("en-US".to_string(), "No consumer registered for {name}".to_string());
        consumer_errors.insert("ja-JP".to_string(), "{name} にコンシューマが登録されていません".to_string());
        translations.insert("error.consumer_missing".to_string(), consumer_errors);

        // 字符集编码失败
        let mut encoding_errors = HashMap::new();
        encoding_errors.insert("zh-CN".to_string(), "字符集 {charset} 编码失败: {message}".to_string());
        encoding_errors.insert("en-US".to_string(), "Encoding with charset {charset} failed: {message}".to_string());
        encoding_errors.insert("ja-JP".to_string(), "文字セット {charset} でのエンコードに失敗しました: {message}".to_string());
        translations.insert("error.encoding".to_string(), encoding_errors);

        // 配置错误
        let mut config_errors = HashMap::new();
        config_errors.insert("zh-CN".to_string(), "配置错误: {message}".to_string());
        config_errors.insert("en-US".to_string(), "Configuration error: {message}".to_string());
        config_errors.insert("ja-JP".to_string(), "設定エラー: {message}".to_string());
        translations.insert("error.config".to_string(), config_errors);

        // 序列化错误
        let mut serialization_errors = HashMap::new();
        serialization_errors.insert("zh-CN".to_string(), "配置序列化失败: {message}".to_string());
        serialization_errors.insert("en-US".to_string(), "Configuration serialization failed: {message}".to_string());
        serialization_errors.insert("ja-JP".to_string(), "設定のシリアライズに失敗しました: {message}".to_string());
        translations.insert("error.serialization".to_string(), serialization_errors);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误消息多语言支持
    ///
    /// 翻译只注册一次，语言设置每次调用都会按环境变量重新选择
    pub fn init() {
        REGISTER_ONCE.call_once(Self::register_all_translations);

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}


/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
