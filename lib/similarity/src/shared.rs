//! Build-once engine handle
//!
//! The engine is expensive to build and read-only afterwards. `SharedEngine`
//! guarantees that only the first caller runs the builder; callers racing on
//! first use block until it finishes and then share the same `Arc<Engine>`.

use crate::Engine;
use parking_lot::{Mutex, RwLock};
use prodsim_core::Result;
use std::sync::Arc;
use tracing::info;

#[derive(Default)]
pub struct SharedEngine {
    // serializes builders; never held by readers
    build: Mutex<()>,
    slot: RwLock<Option<Arc<Engine>>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-built engine, if any
    pub fn get(&self) -> Option<Arc<Engine>> {
        self.slot.read().clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.read().is_some()
    }

    /// Return the engine, running `build` only if nothing is cached yet.
    ///
    /// A failed build leaves the slot empty so a later call can retry.
    pub fn get_or_init<F>(&self, build: F) -> Result<Arc<Engine>>
    where
        F: FnOnce() -> Result<Engine>,
    {
        if let Some(engine) = self.get() {
            return Ok(engine);
        }
        let _building = self.build.lock();
        // another caller may have finished while we waited
        if let Some(engine) = self.get() {
            return Ok(engine);
        }
        let engine = Arc::new(build()?);
        info!("Engine initialized with {} products", engine.len());
        *self.slot.write() = Some(engine.clone());
        Ok(engine)
    }

    /// Rebuild unconditionally and swap the handle.
    ///
    /// Readers keep getting the previous engine until the new one is
    /// swapped in. On failure the previous engine stays in place.
    pub fn reload<F>(&self, build: F) -> Result<Arc<Engine>>
    where
        F: FnOnce() -> Result<Engine>,
    {
        let _building = self.build.lock();
        let engine = Arc::new(build()?);
        info!("Engine reloaded with {} products", engine.len());
        *self.slot.write() = Some(engine.clone());
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;
    use prodsim_core::{Catalog, Error, Product};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::{Duration, Instant};

    fn build() -> Result<Engine> {
        let catalog = Catalog::new(vec![
            Product::new("Earbuds A", "wireless bluetooth earbuds", "Electronics"),
            Product::new("Earbuds B", "bluetooth wireless earbuds", "Electronics"),
        ])?;
        Engine::construct(catalog, EngineConfig::default())
    }

    #[test]
    fn test_builds_once_under_contention() {
        let shared = Arc::new(SharedEngine::new());
        let builds = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                let builds = builds.clone();
                thread::spawn(move || {
                    shared
                        .get_or_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            build()
                        })
                        .unwrap()
                })
            })
            .collect();

        let engines: Vec<Arc<Engine>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(engines.iter().all(|e| Arc::ptr_eq(e, &engines[0])));
    }

    #[test]
    fn test_failed_init_can_retry() {
        let shared = SharedEngine::new();
        assert!(shared.get_or_init(|| Err(Error::EmptyCorpus)).is_err());
        assert!(!shared.is_initialized());
        assert!(shared.get_or_init(build).is_ok());
        assert!(shared.get().is_some());
    }

    #[test]
    fn test_reload_swaps_handle() {
        let shared = SharedEngine::new();
        let first = shared.get_or_init(build).unwrap();
        let second = shared.reload(build).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&shared.get().unwrap(), &second));

        assert!(shared.reload(|| Err(Error::EmptyCorpus)).is_err());
        assert!(Arc::ptr_eq(&shared.get().unwrap(), &second));
    }

    #[test]
    fn test_readers_not_blocked_by_reload() {
        let shared = Arc::new(SharedEngine::new());
        let first = shared.get_or_init(build).unwrap();

        let reloader = {
            let shared = shared.clone();
            thread::spawn(move || {
                shared
                    .reload(|| {
                        thread::sleep(Duration::from_millis(1500));
                        build()
                    })
                    .unwrap()
            })
        };

        thread::sleep(Duration::from_millis(100));
        let started = Instant::now();
        let during = shared.get_or_init(build).unwrap();
        let waited = started.elapsed();
        assert!(waited < Duration::from_millis(200), "reader waited {:?}", waited);
        assert!(Arc::ptr_eq(&during, &first));
        assert!(Arc::ptr_eq(&shared.get().unwrap(), &first));

        let reloaded = reloader.join().unwrap();
        assert!(Arc::ptr_eq(&shared.get().unwrap(), &reloaded));
    }
}
