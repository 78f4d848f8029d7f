//! Concurrency tests
//!
//! These tests verify:
//! - Emit calls from many threads never tear lines
//! - Derived loggers can move to other threads
//! - Forwarders see every event exactly once

use rust_module_logger::appenders::{MemoryAppender, WriterAppender};
use rust_module_logger::core::{Logger, LoggerConfig};
use rust_module_logger::forwarders::{ChannelForwarder, MemoryForwarder};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

fn config() -> LoggerConfig {
    LoggerConfig::default()
        .with_prefix("pool")
        .with_log_level("ALL")
        .with_timestamp(false)
}

#[test]
fn test_shared_logger_across_threads() {
    let sink = Arc::new(WriterAppender::new(Vec::<u8>::new()));
    let logger = Arc::new(Logger::new(sink.clone(), config()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.infoln(format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let output = sink.with_writer(|buf| String::from_utf8(buf.clone()).unwrap());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD);
    assert!(lines.iter().all(|l| l.starts_with("INFO | pool | thread ")));

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
}

#[test]
fn test_derived_loggers_on_threads() {
    let sink = Arc::new(MemoryAppender::new());
    let events = Arc::new(MemoryForwarder::new());
    let mut root = Logger::new(sink.clone(), config());
    root.attach_forwarder(Some(events.clone())).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let module = root.new_module(&format!(".w{}", t));
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    module.warnf(format_args!("tick {}", i));
                    module.debugln("not forwarded");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert_eq!(sink.len(), THREADS * PER_THREAD * 2);
    assert_eq!(events.len(), THREADS * PER_THREAD);

    let services: HashSet<String> = events.events().into_iter().map(|e| e.service).collect();
    let expected: HashSet<String> = (0..THREADS).map(|t| format!("pool.w{}", t)).collect();
    assert_eq!(services, expected);
}

#[test]
fn test_channel_forwarder_consumer_thread() {
    let forwarder = Arc::new(ChannelForwarder::new(THREADS * PER_THREAD));
    let receiver = forwarder.receiver();

    let mut logger = Logger::new(Arc::new(MemoryAppender::new()), config());
    logger.attach_forwarder(Some(forwarder.clone())).unwrap();
    let logger = Arc::new(logger);

    let consumer = thread::spawn(move || {
        let mut received = 0;
        while received < THREADS * PER_THREAD {
            receiver.recv().expect("channel open");
            received += 1;
        }
        received
    });

    let producers: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.errorf(format_args!("failure {}", i));
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().expect("Thread panicked");
    }

    assert_eq!(consumer.join().expect("Consumer panicked"), THREADS * PER_THREAD);
    assert_eq!(forwarder.dropped_count(), 0);
}
