//! Building store port — owner of the process-wide building.

use std::future::Future;

use buildhub_domain::building::Building;

/// Owns the single [`Building`] and hands out scoped access to it.
///
/// Each call runs its closure to completion while holding the store's guard,
/// so a whole read or mutation is atomic with respect to other calls.
pub trait BuildingStore {
    /// Run `f` with shared access to the building.
    fn read<F, R>(&self, f: F) -> impl Future<Output = R> + Send
    where
        F: FnOnce(&Building) -> R + Send,
        R: Send;

    /// Run `f` with exclusive access to the building.
    fn write<F, R>(&self, f: F) -> impl Future<Output = R> + Send
    where
        F: FnOnce(&mut Building) -> R + Send,
        R: Send;
}

impl<T: BuildingStore + Send + Sync> BuildingStore for std::sync::Arc<T> {
    fn read<F, R>(&self, f: F) -> impl Future<Output = R> + Send
    where
        F: FnOnce(&Building) -> R + Send,
        R: Send,
    {
        (**self).read(f)
    }

    fn write<F, R>(&self, f: F) -> impl Future<Output = R> + Send
    where
        F: FnOnce(&mut Building) -> R + Send,
        R: Send,
    {
        (**self).write(f)
    }
}
