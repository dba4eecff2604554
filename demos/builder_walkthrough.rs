//! 构建器模式演示
//!
//! 依次构建三种通信，展示祖先层设置方法与派生层设置方法可以任意交错

use anyhow::Context;
use rat_communication::prelude::*;
use rat_communication::{create_communication, in_memory_config};
use rat_logger::{LoggerBuilder, LevelFilter, handler::term::TermConfig};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    LoggerBuilder::new()
        .with_level(LevelFilter::Info)
        .add_terminal_with_config(TermConfig::default())
        .init()
        .expect("日志初始化失败");
    rat_communication::init();

    println!("=== {} 构建器演示 ===", rat_communication::get_info());

    // 1. 内存通信：先设置自身字段，再设置基础字段
    println!("\n1. 内存通信");
    let echo: SharedConsumer = Arc::new(|bytes: &[u8]| {
        println!("   收到 {} 字节: {:?}", bytes.len(), String::from_utf8_lossy(bytes));
    });
    let memory = InMemoryCommunication::builder()
        .memory_buffer_size(1024)
        .shared_consumer(echo.clone())
        .name("TestCommunication")
        .build()?;
    memory.send(b"0123456789")?;
    match memory.send(&vec![0u8; 2000]) {
        Err(e) => println!("   超大消息被拒绝: {}", e),
        Ok(()) => println!("   超大消息竟然发送成功"),
    }

    // 2. 网络通信：端口 0 由系统分配
    println!("\n2. 网络通信");
    let network = NetworkCommunication::builder()
        .name("TestCommunication")
        .host("127.0.0.1")
        .port(0)
        .build()?;
    println!("   已绑定 {}", network.local_addr());
    network.close()?;

    // 3. 文本通信：最后一步调用的是祖先层的设置方法，build 依然产出文本通信
    println!("\n3. 文本通信");
    let text = TextCommunication::builder()
        .charset_label("UTF-8")
        .host("127.0.0.1")
        .port(12346)
        .name("TestCommunication")
        .build()
        .context("文本通信构建失败，端口 12346 可能已被占用")?;
    println!(
        "   {} -> {}:{}, 字符集={}",
        text.name(),
        text.host(),
        text.port(),
        text.charset().name()
    );
    text.send_text("构建器模式")?;
    text.close()?;

    // 4. 从配置创建
    println!("\n4. 按配置创建");
    let from_config = create_communication(in_memory_config("FromConfig", 64), Some(echo))?;
    from_config.send(b"hello from config")?;

    println!("\n演示完成");
    Ok(())
}
