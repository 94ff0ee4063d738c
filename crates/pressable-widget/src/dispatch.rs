//! Click dispatch and the button widget handle.
//!
//! [`Button`] owns the result-state cell and orchestrates one activation at a
//! time: concurrency gating, handler invocation, settlement wiring, and
//! event-propagation control.
//!
//! ## Dispatch Flow
//!
//! ```text
//! press(event)
//!      │
//!      ▼
//! toggle? flip active
//!      │
//!      ▼
//! effective_disabled = override ?? (pending && prevent_concurrency)
//!      │
//!  ┌───┴────┐
//!  │        │
//!  ▼        ▼
//! disabled  invoke handler(ctx)
//!  │        │
//!  │   ┌────┴─────┐
//!  │   │          │
//!  │   ▼          ▼
//!  │  untracked  tracked future
//!  │   │          │
//!  │   │          ▼
//!  │   │     begin_pending, spawn settlement task
//!  │   │          │
//!  └───┴──────────┘
//!      │
//!      ▼
//! unless bubble: stop propagation
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::event::ActivationEvent;
use crate::press::{PressContext, PressHandler, PressOutcome};
use crate::state::ObservableButtonState;
use pressable_core::{class_list, resolve_icon, resolve_text, ButtonConfig, ButtonState, PressError};

// =============================================================================
// Inner widget state
// =============================================================================

pub(crate) struct Inner {
    pub(crate) config: RwLock<ButtonConfig>,
    pub(crate) state: ObservableButtonState,
    /// Cleared on teardown. Settlements arriving after that are discarded.
    pub(crate) alive: AtomicBool,
}

impl Inner {
    pub(crate) fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

// =============================================================================
// Button
// =============================================================================

/// The button widget handle.
///
/// One handle owns one state cell; state is never shared across widget
/// instances. Settlement tasks hold only `Weak` references, so dropping the
/// handle tears the widget down without waiting for in-flight work.
pub struct Button {
    inner: Arc<Inner>,
    handler: Arc<dyn PressHandler>,
}

/// What one call to [`Button::press`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressReport {
    /// The handler was invoked (the press was not suppressed).
    pub invoked: bool,
    /// A tracked settlement is now pending.
    pub tracked: bool,
}

impl Button {
    /// Create a widget with the given configuration and press handler.
    pub fn new(config: ButtonConfig, handler: impl PressHandler + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                config: RwLock::new(config),
                state: ObservableButtonState::new(),
                alive: AtomicBool::new(true),
            }),
            handler: Arc::new(handler),
        }
    }

    /// Dispatch one activation event.
    ///
    /// Must run inside a tokio runtime when the handler can produce tracked
    /// work; the settlement task is spawned on the ambient runtime.
    pub fn press(&self, event: &mut ActivationEvent) -> PressReport {
        let inner = &self.inner;

        // Toggle flips active before anything else is evaluated.
        let (value, prevent_concurrency, disabled_override, bubble) = {
            let mut config = inner.config.write();
            if config.toggle {
                config.active = !config.active;
            }
            (
                config.value.clone(),
                config.prevent_concurrency,
                config.disabled_override,
                config.bubble,
            )
        };

        let state = inner.state.get();
        let effective_disabled =
            disabled_override.unwrap_or(state.is_pending() && prevent_concurrency);

        let mut report = PressReport {
            invoked: false,
            tracked: false,
        };

        if effective_disabled {
            tracing::debug!("Press suppressed: effectively disabled in {:?}", state);
        } else {
            let mut ctx = PressContext::new(value, std::mem::take(event));
            let outcome = self.handler.on_press(&mut ctx);
            report.invoked = true;

            // A returned future wins over a taken settler.
            let tracked = match outcome {
                PressOutcome::Tracked(future) => Some(future),
                PressOutcome::Untracked => ctx.take_settlement(),
            };
            *event = ctx.into_event();

            if let Some(future) = tracked {
                report.tracked = true;
                inner.state.begin_pending();
                let weak = Arc::downgrade(inner);
                tokio::spawn(async move {
                    let result = future.await;
                    settle(weak, result);
                });
            }
        }

        if !bubble {
            event.stop_propagation();
        }
        report
    }

    /// Mark the widget as torn down.
    ///
    /// There is no cancellation: in-flight work keeps running, but its
    /// settlement no longer mutates state.
    pub fn teardown(&self) {
        self.inner.alive.store(false, Ordering::Release);
    }

    /// Force the state back to `Idle`. Safe to call repeatedly.
    pub fn reset(&self) {
        self.inner.state.reset();
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ButtonConfig {
        self.inner.config.read().clone()
    }

    /// Replace the configuration wholesale. State is untouched.
    pub fn set_config(&self, config: ButtonConfig) {
        *self.inner.config.write() = config;
    }

    /// Whether the widget is currently active (toggle state).
    pub fn is_active(&self) -> bool {
        self.inner.config.read().active
    }

    // =========================================================================
    // Derived read surface
    // =========================================================================

    /// Current result state.
    pub fn state(&self) -> ButtonState {
        self.inner.state.get()
    }

    /// A tracked press is in flight.
    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// The last settlement succeeded.
    pub fn is_fulfilled(&self) -> bool {
        self.state().is_fulfilled()
    }

    /// The last settlement failed.
    pub fn is_rejected(&self) -> bool {
        self.state().is_rejected()
    }

    /// Fulfilled or rejected.
    pub fn is_settled(&self) -> bool {
        self.state().is_settled()
    }

    /// Label for the current state.
    pub fn text(&self) -> String {
        let config = self.inner.config.read();
        resolve_text(&config, self.inner.state.get()).to_string()
    }

    /// Icon token for the current configuration.
    pub fn icon(&self) -> Option<String> {
        let config = self.inner.config.read();
        resolve_icon(&config).map(str::to_string)
    }

    /// Class tokens for rendering.
    pub fn class_list(&self) -> Vec<String> {
        let config = self.inner.config.read();
        class_list(&config, self.inner.state.get())
    }

    /// Subscribe to result-state changes.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<ButtonState> {
        self.inner.state.subscribe()
    }

    pub(crate) fn downgrade(&self) -> Weak<Inner> {
        Arc::downgrade(&self.inner)
    }
}

impl Drop for Button {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Apply a settlement if the widget still exists and is live.
fn settle(weak: Weak<Inner>, result: Result<(), PressError>) {
    let Some(inner) = weak.upgrade() else {
        tracing::debug!("Settlement after widget drop; discarding");
        return;
    };
    if !inner.is_alive() {
        tracing::warn!("Settlement after teardown; discarding");
        return;
    }
    match result {
        Ok(()) => inner.state.settle_fulfilled(),
        Err(error) => {
            tracing::debug!("Press rejected: {}", error);
            inner.state.settle_rejected();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
