use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::collections::queue::{QueueError, QueueSize};
use crate::collections::queue_sync::{
  SyncBlockingQueueBase, SyncBlockingQueueReader, SyncBlockingQueueWriter, SyncQueueBase, SyncQueueReader,
  SyncQueueWriter,
};
use crate::collections::Element;

/// Thread-based counterpart of [`crate::collections::BoundedBlockingQueue`].
///
/// All producer and consumer threads share one lock; `not_full` parks producers while
/// the queue is at capacity and `not_empty` parks consumers while it is empty.
/// Fullness is decided by the explicit element count, never by cursor equality,
/// which keeps a full queue distinguishable from an empty one.
#[derive(Clone)]
pub struct SyncBoundedBlockingQueue<E> {
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

impl<E: Debug> Debug for SyncBoundedBlockingQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SyncBoundedBlockingQueue")
      .field("capacity", &self.inner.capacity)
      .finish()
  }
}

impl<E> SyncBoundedBlockingQueue<E> {
  /// Creates a queue that holds at most `capacity` elements.
  ///
  /// The backing storage is allocated once here and reused for the queue's lifetime.
  /// A capacity of zero is legal: such a queue is permanently both empty and full.
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
}

impl<E: Element> SyncQueueBase<E> for SyncBoundedBlockingQueue<E> {
  fn len(&self) -> QueueSize {
    let state = self.inner.state.lock();
    QueueSize::Limited(state.count)
  }

  fn capacity(&self) -> QueueSize {
    QueueSize::Limited(self.inner.capacity)
  }
}

impl<E: Element> SyncQueueWriter<E> for SyncBoundedBlockingQueue<E> {
  fn offer(&mut self, element: E) -> Result<(), QueueError<E>> {
    let mut state = self.inner.state.lock();
    if state.count == self.inner.capacity {
      return Err(QueueError::OfferError(element));
    }
    state.write(element, self.inner.capacity);
    self.inner.not_empty.notify_one();
    Ok(())
  }
}

impl<E: Element> SyncQueueReader<E> for SyncBoundedBlockingQueue<E> {
  fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut state = self.inner.state.lock();
    if state.count == 0 {
      return Ok(None);
    }
    let element = state.read(self.inner.capacity);
    self.inner.not_full.notify_one();
    Ok(element)
  }

  fn clean_up(&mut self) {
    let mut state = self.inner.state.lock();
    state.buffer.iter_mut().for_each(|slot| *slot = None);
    state.head = 0;
    state.tail = 0;
    state.count = 0;
    self.inner.not_full.notify_all();
    tracing::debug!("queue cleaned up");
  }
}

impl<E: Element> SyncBlockingQueueBase<E> for SyncBoundedBlockingQueue<E> {
  fn remaining_capacity(&self) -> QueueSize {
    let state = self.inner.state.lock();
    QueueSize::Limited(self.inner.capacity - state.count)
  }

  fn is_interrupted(&self) -> bool {
    let state = self.inner.state.lock();
    state.interrupted
  }
}

impl<E: Element> SyncBlockingQueueWriter<E> for SyncBoundedBlockingQueue<E> {
  fn put(&mut self, element: E) -> Result<(), QueueError<E>> {
    let mut state = self.inner.state.lock();
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count < self.inner.capacity {
        break;
      }
      self.inner.not_full.wait(&mut state);
    }
    state.write(element, self.inner.capacity);
    self.inner.not_empty.notify_one();
    Ok(())
  }

  fn put_timeout(&mut self, element: E, timeout: Duration) -> Result<(), QueueError<E>> {
    let deadline = Instant::now() + timeout;
    let mut state = self.inner.state.lock();
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count < self.inner.capacity {
        break;
      }
      if self.inner.not_full.wait_until(&mut state, deadline).timed_out() {
        if state.interrupted {
          return Err(QueueError::InterruptedError);
        }
        if state.count == self.inner.capacity {
          return Err(QueueError::PushTimeoutError(element));
        }
        break;
      }
    }
    state.write(element, self.inner.capacity);
    self.inner.not_empty.notify_one();
    Ok(())
  }

  fn interrupt(&mut self) {
    let mut state = self.inner.state.lock();
    state.interrupted = true;
    self.inner.not_full.notify_all();
    self.inner.not_empty.notify_all();
    tracing::debug!("queue interrupted");
  }

  fn reset_interrupt(&mut self) {
    let mut state = self.inner.state.lock();
    state.interrupted = false;
  }
}

impl<E: Element> SyncBlockingQueueReader<E> for SyncBoundedBlockingQueue<E> {
  fn take(&mut self) -> Result<E, QueueError<E>> {
    let mut state = self.inner.state.lock();
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count > 0 {
        break;
      }
      self.inner.not_empty.wait(&mut state);
    }
    let element = state.read(self.inner.capacity);
    self.inner.not_full.notify_one();
    match element {
      Some(element) => Ok(element),
      None => Err(QueueError::PoolError),
    }
  }

  fn take_timeout(&mut self, timeout: Duration) -> Result<E, QueueError<E>> {
    let deadline = Instant::now() + timeout;
    let mut state = self.inner.state.lock();
    loop {
      if state.interrupted {
        return Err(QueueError::InterruptedError);
      }
      if state.count > 0 {
        break;
      }
      if self.inner.not_empty.wait_until(&mut state, deadline).timed_out() {
        if state.interrupted {
          return Err(QueueError::InterruptedError);
        }
        if state.count == 0 {
          return Err(QueueError::PopTimeoutError);
        }
        break;
      }
    }
    let element = state.read(self.inner.capacity);
    self.inner.not_full.notify_one();
    match element {
      Some(element) => Ok(element),
      None => Err(QueueError::PoolError),
    }
  }
}
