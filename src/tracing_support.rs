//! Tracing support for timing the routing algorithms.
//!
//! This module provides tracing functionality when the `tracing` feature is
//! enabled, and no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static ALGORITHM_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Records the wall time of every closed span, keyed by span name.
    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    ALGORITHM_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs a global subscriber with the timing layer and a warning-level
    /// formatter.  Calling this more than once is harmless.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(TimingLayer)
                .with(fmt::layer().with_test_writer().with_filter(LevelFilter::WARN))
                .try_init();
        });
    }

    /// Returns the accumulated `(name, total time, call count)` of every span
    /// closed on the current thread, sorted by name.
    pub fn algorithm_timings() -> Vec<(&'static str, Duration, usize)> {
        ALGORITHM_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&name, &(duration, count))| (name, duration, count))
                .collect()
        })
    }

    #[doc(hidden)]
    pub fn dump_algorithm_timings() {
        let mut entries = algorithm_timings();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        eprintln!("Algorithm timings (desc):");
        for (name, duration, count) in entries {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    #[doc(hidden)]
    pub fn reset_algorithm_timings() {
        init_tracing();
        ALGORITHM_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    pub(crate) use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn algorithm_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    #[doc(hidden)]
    pub fn dump_algorithm_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn reset_algorithm_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
