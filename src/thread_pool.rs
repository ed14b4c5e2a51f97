//! Shared thread pool for parallel Monte Carlo trials.

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();

/// Get or initialize the crate's thread pool.
///
/// One worker per logical CPU, with named threads so trials are easy to
/// spot in a profiler. Returns `None` if the pool could not be built, in
/// which case callers fall back to rayon's global pool.
#[cfg(feature = "parallel")]
fn thread_pool() -> Option<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            match rayon::ThreadPoolBuilder::new()
                .thread_name(|i| format!("paired-bootstrap-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    tracing::warn!(error = %err, "falling back to the global rayon pool");
                    None
                }
            }
        })
        .as_ref()
}

/// Execute a parallel operation inside the crate's thread pool.
#[cfg(feature = "parallel")]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match thread_pool() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Execute `op` on the calling thread when the `parallel` feature is off.
#[cfg(not(feature = "parallel"))]
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R,
{
    op()
}
