//! The press-handler contract.
//!
//! A handler is the external collaborator the widget dispatches to. It
//! returns either nothing trackable ([`PressOutcome::Untracked`]) or a future
//! whose settlement drives the result state ([`PressOutcome::Tracked`]).
//!
//! ## Two calling conventions, one dispatch path
//!
//! - Modern: the handler returns `PressOutcome::tracked(future)`.
//! - Legacy: the handler takes a [`Settler`] from the context and settles
//!   manually, returning `Untracked`.
//!
//! Both funnel into the same tracked-future dispatch: the dispatcher adapts a
//! taken settler into a future before wiring settlement. If a handler does
//! both, the returned future wins and the settler's sends are ignored.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::future::Future;
use tokio::sync::oneshot;

use crate::event::ActivationEvent;
use pressable_core::PressError;

/// What a press handler produced.
pub enum PressOutcome {
    /// No tracked state change.
    Untracked,
    /// Settlement of this future drives pending → fulfilled/rejected.
    Tracked(BoxFuture<'static, Result<(), PressError>>),
}

impl PressOutcome {
    /// Track `future`; its settlement becomes the button's settlement.
    pub fn tracked<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), PressError>> + Send + 'static,
    {
        PressOutcome::Tracked(future.boxed())
    }
}

impl std::fmt::Debug for PressOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PressOutcome::Untracked => write!(f, "Untracked"),
            PressOutcome::Tracked(_) => write!(f, "Tracked(..)"),
        }
    }
}

/// Handler invoked once per non-suppressed activation.
///
/// A synchronous panic inside the handler is not caught: it unwinds to the
/// caller of [`Button::press`] and no state transition occurs. Only an `Err`
/// settlement of a tracked future becomes the `Rejected` state.
///
/// [`Button::press`]: crate::dispatch::Button::press
#[cfg_attr(test, mockall::automock)]
pub trait PressHandler: Send + Sync {
    /// Handle one activation.
    fn on_press(&self, ctx: &mut PressContext) -> PressOutcome;
}

impl<F> PressHandler for F
where
    F: Fn(&mut PressContext) -> PressOutcome + Send + Sync,
{
    fn on_press(&self, ctx: &mut PressContext) -> PressOutcome {
        self(ctx)
    }
}

/// Everything a handler may look at during one press.
pub struct PressContext {
    value: serde_json::Value,
    event: ActivationEvent,
    settlement: Option<oneshot::Receiver<Result<(), PressError>>>,
    settler_taken: bool,
}

impl PressContext {
    pub(crate) fn new(value: serde_json::Value, event: ActivationEvent) -> Self {
        Self {
            value,
            event,
            settlement: None,
            settler_taken: false,
        }
    }

    /// The button's opaque payload, forwarded unchanged.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// The raw activation event.
    pub fn event(&self) -> &ActivationEvent {
        &self.event
    }

    /// Mutable access to the activation event, for handlers that want to
    /// control propagation themselves.
    pub fn event_mut(&mut self) -> &mut ActivationEvent {
        &mut self.event
    }

    /// Take the manual settlement handle (legacy convention).
    ///
    /// At most one settler exists per press; subsequent calls return `None`.
    pub fn settler(&mut self) -> Option<Settler> {
        if self.settler_taken {
            return None;
        }
        self.settler_taken = true;
        let (tx, rx) = oneshot::channel();
        self.settlement = Some(rx);
        Some(Settler { tx })
    }

    /// Adapt a taken settler into a tracked future.
    ///
    /// A settler dropped without settling resolves to `PressError::Channel`;
    /// a silently stuck Pending would be unobservable.
    pub(crate) fn take_settlement(
        &mut self,
    ) -> Option<BoxFuture<'static, Result<(), PressError>>> {
        let rx = self.settlement.take()?;
        Some(
            async move {
                match rx.await {
                    Ok(result) => result,
                    Err(_) => Err(PressError::Channel(
                        "settler dropped without settling".to_string(),
                    )),
                }
            }
            .boxed(),
        )
    }

    pub(crate) fn into_event(self) -> ActivationEvent {
        self.event
    }
}

/// One-shot manual settlement handle for legacy handlers.
///
/// Consuming methods enforce the at-most-once, exactly-one-branch contract.
pub struct Settler {
    tx: oneshot::Sender<Result<(), PressError>>,
}

impl Settler {
    /// Report success.
    pub fn fulfill(self) {
        let _ = self.tx.send(Ok(()));
    }

    /// Report failure.
    pub fn reject(self, error: PressError) {
        let _ = self.tx.send(Err(error));
    }
}
