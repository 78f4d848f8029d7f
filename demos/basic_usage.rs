//! Basic logger usage
//!
//! Demonstrates levels, module derivation and event forwarding.

use rust_module_logger::prelude::*;
use rust_module_logger::warnf;
use std::sync::Arc;

fn main() -> Result<()> {
    let config = LoggerConfig::default()
        .with_prefix("shop")
        .with_log_level("DEBUG");
    config.validate()?;

    let mut logger = Logger::new(Arc::new(ConsoleAppender::new()), config);

    let events = Arc::new(ChannelForwarder::new(64));
    let receiver = events.receiver();
    logger.attach_forwarder(Some(events))?;

    logger.infoln("starting up");
    logger.debugln("debug lines stay local");

    let db = logger.new_module("/db");
    warnf!(db, "pool at {}% capacity\n", 90);
    db.traceln("below threshold, not printed");

    for event in receiver.try_iter() {
        println!("forwarded: {:?}", event);
    }

    Ok(())
}
