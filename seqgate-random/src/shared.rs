use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::stream::RandomStream;

/// A [`RandomStream`] that several threads draw from in turn.
///
/// Clones share one generator, and each draw holds the lock for its whole rejection loop.
#[derive(Debug, Clone)]
pub struct SharedRandomStream {
    inner: Arc<Mutex<RandomStream>>,
}

impl SharedRandomStream {
    pub fn new(stream: RandomStream) -> Self {
        SharedRandomStream {
            inner: Arc::new(Mutex::new(stream)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RandomStream> {
        // a panic mid-draw leaves the generator in a valid state
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seed(&self) -> u32 {
        self.lock().seed()
    }

    pub fn draw_below(&self, n: u32) -> Result<u32> {
        self.lock().draw_below(n)
    }

    pub fn draw_below_large(&self, n: u64) -> Result<u64> {
        self.lock().draw_below_large(n)
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        self.lock().shuffle(items)
    }

    pub fn split(&self) -> RandomStream {
        self.lock().split()
    }
}

impl From<RandomStream> for SharedRandomStream {
    fn from(stream: RandomStream) -> Self {
        SharedRandomStream::new(stream)
    }
}
