use std::time::Duration;

/// Suspend the current task.
///
/// Callers schedule delayed navigation and transient-error clearing through
/// this; because those run inside component-scope tasks, unmounting the view
/// cancels the timer with it.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
