//! Deferred callbacks standing in for network latency.

use std::time::Duration;

/// Run `f` once after `delay` on the browser event loop.
///
/// Never fires during SSR or native tests. Callers must tolerate the owning
/// component having been disposed (use `try_update` on signals).
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}

/// Call `tick` every `interval` until it returns `false` or `alive` drops.
pub fn every(interval: Duration, alive: std::sync::Arc<std::sync::atomic::AtomicBool>, mut tick: impl FnMut() -> bool + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use std::sync::atomic::Ordering;
        loop {
            gloo_timers::future::sleep(interval).await;
            if !alive.load(Ordering::Relaxed) || !tick() {
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval, alive, &mut tick);
    }
}
