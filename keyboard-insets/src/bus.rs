use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::{InputPanelEvent, PanelSignal};

/// A handler invoked on the UI thread when a subscribed signal is posted.
pub type PanelHandler = Box<dyn FnMut(&InputPanelEvent)>;

/// Opaque handle returned by [`SignalSource::subscribe`].
///
/// Tokens are unique for the lifetime of the source that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionToken(u64);

/// A pub/sub boundary that delivers input panel signals.
///
/// Sources are single-threaded: both methods take `&self` and may be called from inside a
/// handler that the source is currently running.
pub trait SignalSource {
    fn subscribe(&self, signal: PanelSignal, handler: PanelHandler) -> SubscriptionToken;

    /// Removes a subscription. Returns `false` if the token was not (or no longer) registered.
    fn unsubscribe(&self, token: SubscriptionToken) -> bool;
}

impl<S: SignalSource + ?Sized> SignalSource for Rc<S> {
    fn subscribe(&self, signal: PanelSignal, handler: PanelHandler) -> SubscriptionToken {
        (**self).subscribe(signal, handler)
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        (**self).unsubscribe(token)
    }
}

struct Subscription {
    token: SubscriptionToken,
    signal: PanelSignal,
    handler: Rc<RefCell<PanelHandler>>,
}

#[derive(Default)]
struct BusInner {
    next_token: Cell<u64>,
    subscriptions: RefCell<Vec<Subscription>>,
}

/// An in-process notification center for panel signals.
///
/// Cloning yields another handle to the same center. Handlers run in subscription order.
#[derive(Clone, Default)]
pub struct NotificationBus {
    inner: Rc<BusInner>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a closure without boxing it at the call site.
    pub fn subscribe_fn(
        &self,
        signal: PanelSignal,
        handler: impl FnMut(&InputPanelEvent) + 'static,
    ) -> SubscriptionToken {
        self.subscribe(signal, Box::new(handler))
    }

    /// Delivers `event` to every handler subscribed to `event.signal`.
    ///
    /// Returns the number of handlers invoked. The handler list is snapshotted before the first
    /// call: handlers added during the post are not run, handlers removed during the post are
    /// skipped, and a handler that is already running further up the stack is skipped.
    pub fn post(&self, event: &InputPanelEvent) -> usize {
        let batch: Vec<(SubscriptionToken, Rc<RefCell<PanelHandler>>)> = self
            .inner
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.signal == event.signal)
            .map(|s| (s.token, Rc::clone(&s.handler)))
            .collect();

        let mut invoked = 0;
        for (token, handler) in batch {
            if !self.is_subscribed(token) {
                continue;
            }
            let Ok(mut handler) = handler.try_borrow_mut() else {
                kwarn!(?token, signal = ?event.signal, "NotificationBus: skipping re-entrant handler");
                continue;
            };
            let handler = &mut *handler;
            handler(event);
            invoked += 1;
        }
        invoked
    }

    pub fn is_subscribed(&self, token: SubscriptionToken) -> bool {
        self.inner
            .subscriptions
            .borrow()
            .iter()
            .any(|s| s.token == token)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriptions.borrow().len()
    }

    pub fn subscriber_count_for(&self, signal: PanelSignal) -> usize {
        self.inner
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.signal == signal)
            .count()
    }
}

impl SignalSource for NotificationBus {
    fn subscribe(&self, signal: PanelSignal, handler: PanelHandler) -> SubscriptionToken {
        let id = self.inner.next_token.get();
        self.inner.next_token.set(id + 1);
        let token = SubscriptionToken(id);
        self.inner.subscriptions.borrow_mut().push(Subscription {
            token,
            signal,
            handler: Rc::new(RefCell::new(handler)),
        });
        ktrace!(?token, ?signal, "NotificationBus::subscribe");
        token
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        let removed = {
            let mut subs = self.inner.subscriptions.borrow_mut();
            subs.iter()
                .position(|s| s.token == token)
                .map(|pos| subs.remove(pos))
        };
        ktrace!(?token, removed = removed.is_some(), "NotificationBus::unsubscribe");
        // The removed handler is dropped after the borrow ends.
        removed.is_some()
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscriptions", &self.subscriber_count())
            .field("next_token", &self.inner.next_token.get())
            .finish()
    }
}
