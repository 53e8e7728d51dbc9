use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::Duration;

use crate::collections::queue::{
  BlockingQueueBase, BlockingQueueReader, BlockingQueueWriter, QueueBase, QueueError, QueueReader, QueueSize,
  QueueWriter,
};
use crate::collections::Element;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio_condvar::Condvar;

#[derive(Clone)]
pub struct BoundedBlockingQueue<E> {
  inner: Arc<Inner<E>>,
}

struct Inner<E> {
  state: Mutex<QueueState<E>>,
  capacity: usize,
  not_full: Condvar,
  not_empty: Condvar,
}

struct QueueState<E> {
  buffer: Vec<Option<E>>,
  head: usize,
  tail: usize,
  count: usize,
  interrupted: bool,
}

impl<E> QueueState<E> {
  fn write(&mut self, element: E, capacity: usize) {
    let tail = self.tail;
    self.buffer[tail] = Some(element);
    self.tail = (tail + 1) % capacity;
    self.count += 1;
  }

  fn read(&mut self, capacity: usize) -> Option<E> {
    let head = self.head;
    let element = self.buffer[head].take();
    self.head = (head + 1) % capacity;
    self.count -= 1;
    element
  }
}

impl<E: Debug> Debug for BoundedBlockingQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BoundedBlockingQueue")
      .field("capacity", &self.inner.capacity)
      .finish()
  }
}

impl<E> BoundedBlockingQueue<E> {
  /// Creates a queue that holds at most `capacity` elements.
  ///
  /// A capacity of zero is legal: such a queue is permanently both empty and full,
  /// and every blocking insertion or removal waits until it is interrupted or times out.
  pub fn new(capacity: usize) -> Self {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    Self {
      inner: Arc::new(Inner {
        state: Mutex::new(QueueState {
          buffer,
          head: 0,
          tail: 0,
          count: 0,
          interrupted: false,
        }),
        capacity,
        not_full: Condvar::new(),
        not_empty: Condvar::new(),
      }),
    }
  }

  // Waits until a slot frees up, then moves the element out of `slot` under the lock.
  // The move and the cursor update happen in the same synchronous stretch, so a caller
  // that cancels this future mid-wait still owns the element through `slot`.
  async fn write_slot(&self, slot: &mut Option<E>) -> Result<(), QueueError<E>> {
    let mut state = self.inner.state.lock().await;
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count < self.inner.capacity {
        break;
      }
      state = self.inner.not_full.wait(state).await;
    }
    if let Some(element) = slot.take() {
      state.write(element, self.inner.capacity);
      self.inner.not_empty.notify_one();
    }
    Ok(())
  }

  async fn read_slot(&self) -> Result<E, QueueError<E>> {
    let mut state = self.inner.state.lock().await;
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count > 0 {
        break;
      }
      state = self.inner.not_empty.wait(state).await;
    }
    let element = state.read(self.inner.capacity);
    self.inner.not_full.notify_one();
    match element {
      Some(element) => Ok(element),
      None => Err(QueueError::PoolError),
    }
  }
}

#[async_trait]
impl<E: Element> QueueBase<E> for BoundedBlockingQueue<E> {
  async fn len(&self) -> QueueSize {
    let state = self.inner.state.lock().await;
    QueueSize::Limited(state.count)
  }

  async fn capacity(&self) -> QueueSize {
    QueueSize::Limited(self.inner.capacity)
  }
}

#[async_trait]
impl<E: Element> QueueWriter<E> for BoundedBlockingQueue<E> {
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>> {
    let mut state = self.inner.state.lock().await;
    if state.count == self.inner.capacity {
      return Err(QueueError::OfferError(element));
    }
    state.write(element, self.inner.capacity);
    self.inner.not_empty.notify_one();
    Ok(())
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for BoundedBlockingQueue<E> {
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut state = self.inner.state.lock().await;
    if state.count == 0 {
      return Ok(None);
    }
    let element = state.read(self.inner.capacity);
    self.inner.not_full.notify_one();
    Ok(element)
  }

  async fn clean_up(&mut self) {
    let mut state = self.inner.state.lock().await;
    state.buffer.iter_mut().for_each(|slot| *slot = None);
    state.head = 0;
    state.tail = 0;
    state.count = 0;
    self.inner.not_full.notify_all();
    tracing::debug!("queue cleaned up");
  }
}

#[async_trait]
impl<E: Element> BlockingQueueBase<E> for BoundedBlockingQueue<E> {
  async fn remaining_capacity(&self) -> QueueSize {
    let state = self.inner.state.lock().await;
    QueueSize::Limited(self.inner.capacity - state.count)
  }

  async fn is_interrupted(&self) -> bool {
    let state = self.inner.state.lock().await;
    state.interrupted
  }
}

#[async_trait]
impl<E: Element> BlockingQueueWriter<E> for BoundedBlockingQueue<E> {
  async fn put(&mut self, element: E) -> Result<(), QueueError<E>> {
    let mut slot = Some(element);
    self.write_slot(&mut slot).await
  }

  async fn put_timeout(&mut self, element: E, timeout: Duration) -> Result<(), QueueError<E>> {
    let mut slot = Some(element);
    match tokio::time::timeout(timeout, self.write_slot(&mut slot)).await {
      Ok(result) => result,
      Err(_) => match slot.take() {
        Some(element) => Err(QueueError::PushTimeoutError(element)),
        // The final poll committed the element before the deadline was observed.
        None => Ok(()),
      },
    }
  }

  async fn interrupt(&mut self) {
    let mut state = self.inner.state.lock().await;
    state.interrupted = true;
    self.inner.not_full.notify_all();
    self.inner.not_empty.notify_all();
    tracing::debug!("queue interrupted");
  }

  async fn reset_interrupt(&mut self) {
    let mut state = self.inner.state.lock().await;
    state.interrupted = false;
  }
}

#[async_trait]
impl<E: Element> BlockingQueueReader<E> for BoundedBlockingQueue<E> {
  async fn take(&mut self) -> Result<E, QueueError<E>> {
    self.read_slot().await
  }

  async fn take_timeout(&mut self, timeout: Duration) -> Result<E, QueueError<E>> {
    match tokio::time::timeout(timeout, self.read_slot()).await {
      Ok(result) => result,
      Err(_) => Err(QueueError::PopTimeoutError),
    }
  }
}
