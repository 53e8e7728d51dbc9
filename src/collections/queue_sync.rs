use std::fmt::Debug;
use std::time::Duration;

use crate::collections::queue::{QueueError, QueueSize};
use crate::collections::Element;

mod sync_bounded_blocking_queue;

pub use self::sync_bounded_blocking_queue::*;

pub trait SyncQueueBase<E: Element>: Debug + Send + Sync {
  fn len(&self) -> QueueSize;
  fn capacity(&self) -> QueueSize;

  fn is_empty(&self) -> bool {
    self.len() == QueueSize::Limited(0)
  }

  fn is_full(&self) -> bool {
    self.capacity() == self.len()
  }

  fn non_empty(&self) -> bool {
    !self.is_empty()
  }

  fn non_full(&self) -> bool {
    !self.is_full()
  }
}

pub trait SyncQueueWriter<E: Element>: SyncQueueBase<E> {
  fn offer(&mut self, element: E) -> Result<(), QueueError<E>>;

  fn offer_all<I>(&mut self, elements: I) -> Result<(), QueueError<E>>
  where
    I: IntoIterator<Item = E>, {
    for element in elements {
      self.offer(element)?;
    }
    Ok(())
  }
}

pub trait SyncQueueReader<E: Element>: SyncQueueBase<E> {
  fn poll(&mut self) -> Result<Option<E>, QueueError<E>>;
  fn clean_up(&mut self);
}

pub trait SyncBlockingQueueBase<E: Element>: SyncQueueBase<E> {
  fn remaining_capacity(&self) -> QueueSize;
  fn is_interrupted(&self) -> bool;
}

pub trait SyncBlockingQueueWriter<E: Element>: SyncBlockingQueueBase<E> + SyncQueueWriter<E> {
  /// Inserts the element, suspending the calling thread until space is available.
  fn put(&mut self, element: E) -> Result<(), QueueError<E>>;

  /// Inserts the element, waiting at most `timeout` for space. On expiry the element
  /// is handed back inside `QueueError::PushTimeoutError` and the queue is unchanged.
  fn put_timeout(&mut self, element: E, timeout: Duration) -> Result<(), QueueError<E>>;

  fn interrupt(&mut self);
  fn reset_interrupt(&mut self);
}

pub trait SyncBlockingQueueReader<E: Element>: SyncBlockingQueueBase<E> + SyncQueueReader<E> {
  /// Removes and returns the head element, suspending the calling thread until one arrives.
  fn take(&mut self) -> Result<E, QueueError<E>>;

  /// Removes and returns the head element, waiting at most `timeout` for one to arrive.
  fn take_timeout(&mut self, timeout: Duration) -> Result<E, QueueError<E>>;
}
