use futures::FutureExt;
use scopeguard::ScopeGuard;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use userdash_core::Signal;

/// Arms a guard that writes `reset` into `signal` when dropped, if the
/// signal still holds a pending value.
///
/// Covers the exits that skip the normal state write: a panic unwinding
/// through the operation, or the operation's future being dropped.
pub(crate) fn restore_on_exit<T, P>(
	signal: &Signal<T>,
	still_pending: P,
	reset: T,
) -> ScopeGuard<Signal<T>, impl FnOnce(Signal<T>)>
where
	T: Clone + 'static,
	P: Fn(&T) -> bool + 'static,
{
	scopeguard::guard(signal.clone(), move |signal| {
		if signal.with(|value| still_pending(value)) {
			signal.set(reset);
		}
	})
}

/// Polls `future`, returning `None` if it panicked.
pub(crate) async fn catch_panic<F: Future>(future: F) -> Option<F::Output> {
	AssertUnwindSafe(future).catch_unwind().await.ok()
}
