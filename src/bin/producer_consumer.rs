//! Producer/consumer walkthrough of the bounded blocking queue.

use std::thread;
use std::time::Duration;

use bounded_blocking_queue_rs::collections::{
  SyncBlockingQueueReader, SyncBlockingQueueWriter, SyncBoundedBlockingQueue, SyncQueueBase,
};
use tracing::info;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let mut queue = SyncBoundedBlockingQueue::new(5);

  info!(empty = queue.is_empty(), len = queue.len().to_usize(), "initial state");

  for i in 1..=5 {
    queue.put(i).unwrap();
    info!(pushed = i, len = queue.len().to_usize(), "pushed");
  }

  info!(full = queue.is_full(), "queue filled");

  match queue.put_timeout(6, Duration::from_millis(100)) {
    Ok(()) => info!("unexpected success"),
    Err(e) => info!(error = %e, "timed push on a full queue failed"),
  }

  while queue.non_empty() {
    let value = queue.take().unwrap();
    info!(popped = value, len = queue.len().to_usize(), "popped");
  }

  match queue.take_timeout(Duration::from_millis(100)) {
    Ok(value) => info!(value, "unexpected success"),
    Err(e) => info!(error = %e, "timed pop on an empty queue failed"),
  }

  info!("starting producer-consumer demo");

  let mut producer_queue = queue.clone();
  let producer = thread::spawn(move || {
    for i in 10..15 {
      thread::sleep(Duration::from_millis(200));
      producer_queue.put(i).unwrap();
      info!(produced = i, "produced");
    }
  });

  let mut consumer_queue = queue.clone();
  let consumer = thread::spawn(move || {
    for _ in 0..5 {
      thread::sleep(Duration::from_millis(300));
      let value = consumer_queue.take().unwrap();
      info!(consumed = value, "consumed");
    }
  });

  producer.join().unwrap();
  consumer.join().unwrap();

  info!("demo complete");
}
