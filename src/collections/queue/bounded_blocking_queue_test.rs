#[cfg(test)]
mod tests {
  use std::time::Duration;

  use crate::collections::element::Element;
  use crate::collections::queue::bounded_blocking_queue::BoundedBlockingQueue;
  use crate::collections::{
    BlockingQueueBase, BlockingQueueReader, BlockingQueueWriter, QueueBase, QueueError, QueueReader, QueueSize,
    QueueWriter,
  };

  #[derive(Debug, Clone, PartialEq)]
  struct TestElement(i32);

  impl Element for TestElement {}

  #[tokio::test]
  async fn test_new_queue() {
    let queue = BoundedBlockingQueue::<TestElement>::new(10);
    assert_eq!(queue.capacity().await, QueueSize::Limited(10));
    assert_eq!(queue.len().await, QueueSize::Limited(0));
    assert!(queue.is_empty().await);
    assert!(!queue.is_full().await);
  }

  #[tokio::test]
  async fn test_offer_and_poll() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(5);

    for i in 0..5 {
      assert!(queue.offer(TestElement(i)).await.is_ok());
    }

    assert_eq!(queue.len().await, QueueSize::Limited(5));
    assert!(queue.is_full().await);

    for i in 0..5 {
      let element = queue.poll().await.unwrap().unwrap();
      assert_eq!(element, TestElement(i));
    }

    assert_eq!(queue.len().await, QueueSize::Limited(0));
    assert!(queue.poll().await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_offer_to_full_queue() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(2);

    assert!(queue.offer(TestElement(1)).await.is_ok());
    assert!(queue.offer(TestElement(2)).await.is_ok());

    match queue.offer(TestElement(3)).await {
      Err(QueueError::OfferError(TestElement(3))) => (),
      other => panic!("Expected OfferError, got {:?}", other),
    }

    assert_eq!(queue.len().await, QueueSize::Limited(2));
  }

  #[tokio::test]
  async fn test_put_and_take_fifo() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(3);

    for i in 0..3 {
      assert!(queue.put(TestElement(i)).await.is_ok());
    }

    for i in 0..3 {
      assert_eq!(queue.take().await.unwrap(), TestElement(i));
    }

    assert!(queue.is_empty().await);
  }

  #[tokio::test]
  async fn test_wrap_around() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(4);

    for i in 1..=4 {
      queue.put(TestElement(i)).await.unwrap();
    }
    assert_eq!(queue.take().await.unwrap(), TestElement(1));
    queue.put(TestElement(5)).await.unwrap();

    for i in 2..=5 {
      assert_eq!(queue.take().await.unwrap(), TestElement(i));
    }
    assert!(queue.is_empty().await);
  }

  #[tokio::test]
  async fn test_put_timeout_on_full_queue() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(2);
    queue.put(TestElement(1)).await.unwrap();
    queue.put(TestElement(2)).await.unwrap();

    match queue.put_timeout(TestElement(3), Duration::from_millis(50)).await {
      Err(QueueError::PushTimeoutError(TestElement(3))) => (),
      other => panic!("Expected PushTimeoutError, got {:?}", other),
    }

    assert_eq!(queue.len().await, QueueSize::Limited(2));
  }

  #[tokio::test]
  async fn test_take_timeout_on_empty_queue() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(2);

    let start = tokio::time::Instant::now();
    match queue.take_timeout(Duration::from_millis(100)).await {
      Err(QueueError::PopTimeoutError) => (),
      other => panic!("Expected PopTimeoutError, got {:?}", other),
    }
    assert!(start.elapsed() >= Duration::from_millis(100));
  }

  #[tokio::test]
  async fn test_zero_capacity_queue() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(0);

    assert!(queue.is_empty().await);
    assert!(queue.is_full().await);
    assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(0));

    match queue.put_timeout(TestElement(1), Duration::from_millis(10)).await {
      Err(QueueError::PushTimeoutError(TestElement(1))) => (),
      other => panic!("Expected PushTimeoutError, got {:?}", other),
    }

    match queue.take_timeout(Duration::from_millis(10)).await {
      Err(QueueError::PopTimeoutError) => (),
      other => panic!("Expected PopTimeoutError, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_single_capacity_queue() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(1);

    queue.put(TestElement(42)).await.unwrap();
    assert!(queue.is_full().await);

    match queue.put_timeout(TestElement(43), Duration::from_millis(10)).await {
      Err(QueueError::PushTimeoutError(TestElement(43))) => (),
      other => panic!("Expected PushTimeoutError, got {:?}", other),
    }
    assert_eq!(queue.len().await, QueueSize::Limited(1));

    assert_eq!(queue.take().await.unwrap(), TestElement(42));
    assert!(queue.is_empty().await);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_put_unblocks_after_take() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(1);
    queue.put(TestElement(1)).await.unwrap();

    let mut producer = queue.clone();
    let handle = tokio::spawn(async move { producer.put(TestElement(2)).await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(queue.take().await.unwrap(), TestElement(1));

    handle.await.unwrap().unwrap();
    assert_eq!(queue.take().await.unwrap(), TestElement(2));
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn test_interrupt_wakes_blocked_take() {
    let queue = BoundedBlockingQueue::<TestElement>::new(2);

    let mut consumer = queue.clone();
    let handle = tokio::spawn(async move { consumer.take().await });

    tokio::time::sleep(Duration::from_millis(50)).await;
    let mut q = queue.clone();
    q.interrupt().await;

    match handle.await.unwrap() {
      Err(QueueError::InterruptedError) => (),
      other => panic!("Expected InterruptedError, got {:?}", other),
    }
    assert!(q.is_interrupted().await);

    // The latch also fails blocking calls that start afterwards.
    match q.put(TestElement(1)).await {
      Err(QueueError::InterruptedError) => (),
      other => panic!("Expected InterruptedError, got {:?}", other),
    }

    q.reset_interrupt().await;
    assert!(!q.is_interrupted().await);
    q.put(TestElement(1)).await.unwrap();
    assert_eq!(q.take().await.unwrap(), TestElement(1));
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_concurrent_producers_consumers() {
    const PRODUCERS: i32 = 4;
    const CONSUMERS: i32 = 4;
    const ITEMS_PER_PRODUCER: i32 = 100;

    let queue = BoundedBlockingQueue::<TestElement>::new(5);

    let mut producer_handles = vec![];
    for p in 0..PRODUCERS {
      let mut q = queue.clone();
      producer_handles.push(tokio::spawn(async move {
        for i in 0..ITEMS_PER_PRODUCER {
          q.put(TestElement(p * ITEMS_PER_PRODUCER + i)).await.unwrap();
        }
      }));
    }

    let mut consumer_handles = vec![];
    for _ in 0..CONSUMERS {
      let mut q = queue.clone();
      consumer_handles.push(tokio::spawn(async move {
        let mut sum: i64 = 0;
        for _ in 0..ITEMS_PER_PRODUCER {
          let TestElement(value) = q.take().await.unwrap();
          sum += value as i64;
        }
        sum
      }));
    }

    futures::future::join_all(producer_handles)
      .await
      .into_iter()
      .for_each(|r| r.unwrap());
    let consumed_sum: i64 = futures::future::join_all(consumer_handles)
      .await
      .into_iter()
      .map(|r| r.unwrap())
      .sum();

    let total = PRODUCERS * ITEMS_PER_PRODUCER;
    let expected_sum: i64 = (0..total).map(|v| v as i64).sum();
    assert_eq!(consumed_sum, expected_sum);
    assert_eq!(queue.len().await, QueueSize::Limited(0));
  }

  #[tokio::test]
  async fn test_remaining_capacity() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(3);
    assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(3));

    queue.put(TestElement(1)).await.unwrap();
    assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(2));

    queue.take().await.unwrap();
    assert_eq!(queue.remaining_capacity().await, QueueSize::Limited(3));
  }

  #[tokio::test]
  async fn test_clean_up() {
    let mut queue = BoundedBlockingQueue::<TestElement>::new(5);

    for i in 0..3 {
      queue.put(TestElement(i)).await.unwrap();
    }

    queue.clean_up().await;

    assert_eq!(queue.len().await, QueueSize::Limited(0));
    assert!(queue.poll().await.unwrap().is_none());

    // The queue stays usable after a clean up.
    queue.put(TestElement(7)).await.unwrap();
    assert_eq!(queue.take().await.unwrap(), TestElement(7));
  }
}
