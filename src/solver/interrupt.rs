use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Cooperative cancellation token.
///
/// Clones share one flag. Listeners [`raise`](Self::raise) it from any
/// thread; the driver only [`raised`](Self::raised)-checks it at the top of
/// each iteration, so an interrupted run always ends on a whole iteration.
#[derive(Debug, Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
    pub fn raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
    /// Re-arm for the next scenario.
    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
