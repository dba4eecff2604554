//! 构建器集成测试
//!
//! 覆盖三种通信类型的链式构建、字段继承与发送行为

use parking_lot::Mutex;
use rat_communication::prelude::*;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

/// 基础参数
const NAME: &str = "TestCommunication";
/// 内存通信参数
const MEMORY_BUFFER_SIZE: usize = 1024; // bytes
/// 网络通信参数
const HOST: &str = "127.0.0.1";
const PORT: u16 = 12346;
/// 文本通信参数
const CHARSET: &str = "UTF-8";

fn setup() {
    // 初始化日志系统
    let _ = rat_logger::LoggerBuilder::new()
        .with_level(rat_logger::LevelFilter::Debug)
        .add_terminal_with_config(rat_logger::handler::term::TermConfig::default())
        .init();
    rat_communication::init();
}

/// 记录所有投递的回显消费者
fn echo_consumer() -> (Arc<Mutex<Vec<Vec<u8>>>>, SharedConsumer) {
    let deliveries = Arc::new(Mutex::new(Vec::new()));
    let sink = deliveries.clone();
    let consumer: SharedConsumer = Arc::new(move |bytes: &[u8]| sink.lock().push(bytes.to_vec()));
    (deliveries, consumer)
}

fn check_base(comm: &dyn Communication, consumer: Option<&SharedConsumer>) {
    assert_eq!(comm.name(), NAME);
    match (comm.consumer(), consumer) {
        (Some(actual), Some(expected)) => assert!(Arc::ptr_eq(actual, expected)),
        (None, None) => {}
        _ => panic!("消费者与构建时设置的不一致"),
    }
}

fn check_network<N: AsRef<NetworkCommunication>>(comm: &N, port: u16) {
    let network = comm.as_ref();
    assert_eq!(network.host(), HOST);
    assert_eq!(network.port(), port);
    assert!(network.is_connected());
}

#[test]
fn init_is_idempotent() {
    rat_communication::init();
    rat_communication::init();

    let err = assert_err!(InMemoryCommunication::builder().name("x").build());
    assert!(matches!(err, CommError::ConfigError { .. }));

    let comm = assert_ok!(
        InMemoryCommunication::builder()
            .name("x")
            .memory_buffer_size(1)
            .build()
    );
    let err = assert_err!(comm.send(b"12"));
    assert!(matches!(err, CommError::MessageTooLarge { .. }));
}

#[test]
fn check_in_memory_communication() {
    setup();
    let (deliveries, consumer) = echo_consumer();

    let comm = assert_ok!(
        InMemoryCommunication::builder()
            .memory_buffer_size(MEMORY_BUFFER_SIZE)
            .shared_consumer(consumer.clone())
            .name(NAME)
            .build()
    );

    check_base(&comm, Some(&consumer));
    assert_eq!(comm.memory_buffer_size(), MEMORY_BUFFER_SIZE);
    assert_eq!(comm.kind(), CommunicationKind::InMemory);

    let small = vec![7u8; 10];
    assert_ok!(comm.send(&small));
    assert_eq!(deliveries.lock().as_slice(), &[small.clone()]);

    let big = vec![1u8; 2000];
    let err = assert_err!(comm.send(&big));
    assert!(matches!(err, CommError::MessageTooLarge { size: 2000, capacity: 1024, .. }));
    assert_eq!(deliveries.lock().len(), 1);

    assert_ok!(comm.close());
}

#[test]
fn check_network_communication() {
    setup();

    let comm = assert_ok!(
        NetworkCommunication::builder()
            .host(HOST)
            .port(0)
            .name(NAME)
            .build()
    );

    check_base(&comm, None);
    check_network(&comm, 0);
    assert_eq!(comm.kind(), CommunicationKind::Network);

    assert_ok!(comm.close());
    assert!(!comm.is_connected());
}

#[test]
fn check_text_communication() {
    setup();

    // 祖先层的设置方法放在最后，构建出的仍然是文本通信
    let comm = assert_ok!(
        TextCommunication::builder()
            .charset_label(CHARSET)
            .host(HOST)
            .port(PORT)
            .name(NAME)
            .build()
    );

    check_base(&comm, None);
    check_network(&comm, PORT);
    let bound = assert_ok!(comm.with_socket(|socket| socket.local_addr()).expect("套接字应当存在"));
    assert_eq!(bound, comm.local_addr());
    assert_eq!(comm.charset().name(), CHARSET);
    assert_eq!(comm.local_addr().port(), PORT);
    assert_eq!(comm.kind(), CommunicationKind::Text);

    assert_ok!(comm.send_text("hello"));
    assert_ok!(comm.close());
}

#[test]
fn text_round_trip() {
    setup();
    let comm = assert_ok!(
        TextCommunication::builder()
            .name(NAME)
            .host(HOST)
            .port(0)
            .charset(encoding_rs::UTF_8)
            .build()
    );

    for text in ["", "ascii", "构建器模式", "ビルダー", "emoji 🚀"] {
        let bytes = assert_ok!(comm.encode_text(text));
        assert_eq!(assert_ok!(comm.decode_text(&bytes)), text);
    }
    assert_ok!(comm.close());
}

#[test]
fn unbindable_host_is_reported() {
    setup();

    let err = assert_err!(
        TextCommunication::builder()
            .name(NAME)
            .charset_label(CHARSET)
            .host("192.0.2.1")
            .port(40001)
            .build()
    );

    assert!(matches!(err, CommError::ConstructionFailed { port: 40001, .. }));
}

#[test]
fn boxed_communications_dispatch_by_kind() {
    setup();
    let (deliveries, consumer) = echo_consumer();

    let communications: Vec<Box<dyn Communication>> = vec![
        assert_ok!(
            InMemoryCommunication::builder()
                .name(NAME)
                .shared_consumer(consumer)
                .memory_buffer_size(4)
                .build_boxed()
        ),
        assert_ok!(NetworkCommunication::builder().name(NAME).host(HOST).port(0).build_boxed()),
        assert_ok!(
            TextCommunication::builder()
                .name(NAME)
                .host(HOST)
                .port(0)
                .charset_label("gbk")
                .build_boxed()
        ),
    ];

    let kinds: Vec<_> = communications.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![CommunicationKind::InMemory, CommunicationKind::Network, CommunicationKind::Text]
    );

    for comm in &communications {
        assert_ok!(comm.send(b"ping"));
        assert_ok!(comm.close());
    }
    assert_eq!(deliveries.lock().len(), 1);
}
