//! Event bus: keyed observer registry + synchronous broadcast.
//!
//! [`EventBus`] lets independent parts of an application communicate without
//! holding references to each other: subscribers register an observer under a
//! caller-chosen key, publishers broadcast named events, and the bus invokes
//! every registered observer on the publisher's thread.
//!
//! ## Rules
//! - **Synchronous dispatch**: [`EventBus::next`] returns only after every
//!   observer in the snapshot has run. There is no queuing and no deferred
//!   delivery.
//! - **One observer per key**: registering an existing key replaces the
//!   previous observer silently (last write wins). A replaced key keeps its
//!   original position in dispatch order.
//! - **Registration order**: observers are invoked in the order their keys
//!   were first registered, deterministically for a fixed registration
//!   history.
//! - **Stable snapshot**: the set of observers is captured once per dispatch,
//!   before the first invocation. Observers may add or remove observers (or
//!   publish) from inside their own invocation; such mutations affect only
//!   subsequent dispatches, never the in-flight snapshot.
//! - **Fail-fast**: the bus does not catch panics. A panicking observer
//!   unwinds through `next` and the remaining snapshotted observers are not
//!   invoked.
//!
//! ## Debug mode
//! [`EventBus::debug`] toggles a bus-wide flag. While set, every dispatch
//! first emits a `tracing` record with the event name and data (target
//! `reactive_robot::bus`, level `DEBUG`). The record format is a diagnostic
//! aid, not a compatibility contract.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::events::{Event, Payload};
use crate::observers::{ObserverFn, ObserverRef};
use crate::store::Store;

/// Shared state behind every clone of a bus handle.
struct BusInner<T: 'static> {
    /// Insertion-ordered key → observer registry.
    observers: Mutex<IndexMap<String, ObserverRef<T>>>,
    /// Dispatch diagnostic toggle.
    debug: AtomicBool,
    /// Out-of-band key→value stash shared by everything on this bus.
    store: Store,
}

/// Synchronous in-process event bus.
///
/// Cheap to clone: every clone shares the same registry, debug flag and
/// [`Store`]. Construct one bus per application (or per test) and hand
/// clones to publishers and subscribers.
///
/// The data type is generic with [`Payload`] as the default, so untyped and
/// typed usage share one contract:
///
/// - `EventBus::new()` → `EventBus<Payload>`, open key→value event data;
/// - `EventBus::<MyEvent>::new()` → closed, compile-checked event data.
///
/// ### Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use reactive_robot::{EventBus, Payload};
///
/// let bus: EventBus = EventBus::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// bus.add_observer_fn("log", move |ev| {
///     sink.lock().unwrap().push((ev.name.to_string(), ev.data.clone()));
/// });
///
/// bus.next("ping", Payload::new().with("v", 1));
/// bus.notify("pong"); // empty payload
///
/// let seen = seen.lock().unwrap();
/// assert_eq!(seen[0], ("ping".to_string(), Payload::new().with("v", 1)));
/// assert_eq!(seen[1], ("pong".to_string(), Payload::new()));
/// ```
pub struct EventBus<T: 'static = Payload> {
    inner: Arc<BusInner<T>>,
}

impl<T: 'static> EventBus<T> {
    /// Creates an empty bus with debug mode off.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                observers: Mutex::new(IndexMap::new()),
                debug: AtomicBool::new(false),
                store: Store::new(),
            }),
        }
    }

    /// Registers `observer` under `key`, replacing any previous observer
    /// registered under the same key.
    ///
    /// `key` must be non-empty and unique per active subscription; re-using
    /// a key is the supported way to swap a handler in place. Registration
    /// never fails and overwriting raises no error.
    pub fn add_observer(&self, key: impl Into<String>, observer: ObserverRef<T>) {
        let key = key.into();
        debug_assert!(!key.is_empty(), "observer key must be non-empty");
        self.inner.observers.lock().insert(key, observer);
    }

    /// Registers a closure under `key`.
    ///
    /// Shorthand for `add_observer(key, ObserverFn::arc(f))`.
    pub fn add_observer_fn<F>(&self, key: impl Into<String>, f: F)
    where
        F: Fn(&Event<T>) + Send + Sync + 'static,
    {
        self.add_observer(key, ObserverFn::arc(f));
    }

    /// Removes the observer registered under `key`.
    ///
    /// Idempotent: removing an absent key is a no-op, never a failure.
    pub fn remove_observer(&self, key: &str) {
        self.inner.observers.lock().shift_remove(key);
    }

    /// Returns `true` if an observer is currently registered under `key`.
    pub fn contains_observer(&self, key: &str) -> bool {
        self.inner.observers.lock().contains_key(key)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().len()
    }

    /// Returns `true` if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.inner.observers.lock().is_empty()
    }

    /// Sets the bus-wide debug flag.
    ///
    /// Takes effect for all subsequent dispatches on this bus and its
    /// clones; past events are not replayed.
    pub fn debug(&self, enabled: bool) {
        self.inner.debug.store(enabled, AtomicOrdering::Relaxed);
    }

    /// Returns the current state of the debug flag.
    pub fn is_debug(&self) -> bool {
        self.inner.debug.load(AtomicOrdering::Relaxed)
    }

    /// The key→value stash shared by every clone of this bus.
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Captures the current registry contents in registration order.
    ///
    /// The lock is released before the caller invokes anything, so observers
    /// are free to mutate the registry while the snapshot is being walked.
    fn snapshot(&self) -> Vec<ObserverRef<T>> {
        self.inner.observers.lock().values().cloned().collect()
    }
}

impl<T: fmt::Debug + 'static> EventBus<T> {
    /// Broadcasts a pre-built event to every registered observer.
    ///
    /// If debug mode is on, first emits a diagnostic `tracing` record for
    /// the event. Then invokes each observer from a stable snapshot of the
    /// registry, in registration order, on the caller's thread. Returns
    /// once the whole snapshot has been invoked.
    pub fn publish(&self, event: Event<T>) {
        debug_assert!(!event.name.is_empty(), "event name must be non-empty");
        if self.is_debug() {
            tracing::debug!(
                target: "reactive_robot::bus",
                name = %event.name,
                data = ?event.data,
                "dispatch"
            );
        }
        for observer in self.snapshot() {
            observer.on_event(&event);
        }
    }

    /// Broadcasts an event built from `name` and `data`.
    ///
    /// Equivalent to `publish(Event::new(name, data))`.
    pub fn next(&self, name: impl Into<Arc<str>>, data: T) {
        self.publish(Event::new(name, data));
    }
}

impl<T: fmt::Debug + Default + 'static> EventBus<T> {
    /// Broadcasts an event carrying an empty (default) payload.
    ///
    /// Equivalent to `publish(Event::named(name))`.
    pub fn notify(&self, name: impl Into<Arc<str>>) {
        self.publish(Event::named(name));
    }
}

impl<T: 'static> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observer_count())
            .field("debug", &self.is_debug())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;

    fn collector(bus: &EventBus, key: &str) -> Arc<Mutex<Vec<(String, Payload)>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.add_observer_fn(key, move |ev: &Event| {
            sink.lock().unwrap().push((ev.name.to_string(), ev.data.clone()));
        });
        seen
    }

    #[test]
    fn test_observer_receives_published_event_once() {
        let bus: EventBus = EventBus::new();
        let seen = collector(&bus, "log");

        bus.next("ping", Payload::new().with("v", 1));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "ping");
        assert_eq!(seen[0].1, Payload::new().with("v", 1));
    }

    #[test]
    fn test_notify_carries_empty_payload() {
        let bus: EventBus = EventBus::new();
        let seen = collector(&bus, "log");

        bus.next("ping", Payload::new().with("v", 1));
        bus.notify("pong");

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("ping".to_string(), Payload::new().with("v", 1)),
                ("pong".to_string(), Payload::new()),
            ]
        );
    }

    #[test]
    fn test_readding_key_replaces_observer() {
        let bus: EventBus = EventBus::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let hits = Arc::clone(&first);
        bus.add_observer_fn("x", move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        let hits = Arc::clone(&second);
        bus.add_observer_fn("x", move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        });

        bus.notify("e");

        assert_eq!(first.load(Ordering::SeqCst), 0, "replaced observer must not run");
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(bus.observer_count(), 1);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let bus: EventBus = EventBus::new();
        let seen = collector(&bus, "keep");

        bus.remove_observer("never-added");
        bus.notify("e");

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(bus.contains_observer("keep"));
    }

    #[test]
    fn test_dispatch_follows_registration_order() {
        let bus: EventBus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for key in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            bus.add_observer_fn(key, move |_| order.lock().unwrap().push(key));
        }

        bus.notify("e");

        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replaced_key_keeps_dispatch_position() {
        let bus: EventBus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for key in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            bus.add_observer_fn(key, move |_| order.lock().unwrap().push(key));
        }
        // Swap "a" in place; it must not move to the end.
        let sink = Arc::clone(&order);
        bus.add_observer_fn("a", move |_| sink.lock().unwrap().push("a2"));

        bus.notify("e");

        assert_eq!(*order.lock().unwrap(), vec!["a2", "b", "c"]);
    }

    #[test]
    fn test_removal_during_dispatch_spares_current_snapshot() {
        let bus: EventBus = EventBus::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let peer = bus.clone();
        let sink = Arc::clone(&calls);
        bus.add_observer_fn("a", move |ev: &Event| {
            sink.lock().unwrap().push(format!("a:{}", ev.name));
            peer.remove_observer("b");
        });
        let sink = Arc::clone(&calls);
        bus.add_observer_fn("b", move |ev: &Event| {
            sink.lock().unwrap().push(format!("b:{}", ev.name));
        });

        bus.notify("e1");
        bus.notify("e2");

        // "b" was snapshotted for e1 and still runs; it is gone for e2.
        assert_eq!(*calls.lock().unwrap(), vec!["a:e1", "b:e1", "a:e2"]);
    }

    #[test]
    fn test_addition_during_dispatch_takes_effect_next_dispatch() {
        let bus: EventBus = EventBus::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let peer = bus.clone();
        let sink = Arc::clone(&calls);
        bus.add_observer_fn("a", move |ev: &Event| {
            sink.lock().unwrap().push(format!("a:{}", ev.name));
            let sink = Arc::clone(&sink);
            peer.add_observer_fn("late", move |ev: &Event| {
                sink.lock().unwrap().push(format!("late:{}", ev.name));
            });
        });

        bus.notify("e1");
        bus.notify("e2");

        assert_eq!(*calls.lock().unwrap(), vec!["a:e1", "a:e2", "late:e2"]);
    }

    #[test]
    fn test_nested_publish_inside_observer() {
        let bus: EventBus = EventBus::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let peer = bus.clone();
        let sink = Arc::clone(&calls);
        bus.add_observer_fn("relay", move |ev: &Event| {
            sink.lock().unwrap().push(ev.name.to_string());
            if &*ev.name == "outer" {
                peer.notify("inner");
            }
        });

        bus.notify("outer");

        assert_eq!(*calls.lock().unwrap(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_clones_share_registry_debug_and_store() {
        let bus: EventBus = EventBus::new();
        let clone = bus.clone();
        let seen = collector(&bus, "log");

        clone.notify("e");
        clone.debug(true);
        clone.store().set("k", 7).unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(bus.is_debug());
        assert_eq!(bus.store().get_as::<u32>("k").unwrap(), 7);
    }

    #[test]
    fn test_typed_bus_dispatches_custom_payload() {
        #[derive(Clone, Debug, Default, PartialEq)]
        struct Tick {
            n: u32,
        }

        let bus: EventBus<Tick> = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        bus.add_observer_fn("ticks", move |ev: &Event<Tick>| {
            sink.lock().unwrap().push(ev.data.clone());
        });

        bus.next("tick", Tick { n: 3 });
        bus.notify("tick");

        assert_eq!(*seen.lock().unwrap(), vec![Tick { n: 3 }, Tick::default()]);
    }

    #[derive(Clone)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_debug_flag_gates_dispatch_diagnostic() {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(Capture(Arc::clone(&buf)))
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let bus: EventBus = EventBus::new();
            bus.debug(true);
            bus.next("ping", Payload::new().with("a", 1));
            bus.debug(false);
            bus.notify("quiet");
        });

        let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(out.contains("ping"), "diagnostic should name the event: {out}");
        assert!(out.contains("a"), "diagnostic should show the data: {out}");
        assert!(!out.contains("quiet"), "debug(false) must suppress the diagnostic: {out}");
    }

    #[test]
    #[should_panic(expected = "observer key must be non-empty")]
    #[cfg(debug_assertions)]
    fn test_empty_observer_key_rejected_in_debug_builds() {
        let bus: EventBus = EventBus::new();
        bus.add_observer_fn("", |_| {});
    }

    #[test]
    #[should_panic(expected = "event name must be non-empty")]
    #[cfg(debug_assertions)]
    fn test_empty_event_name_rejected_in_debug_builds() {
        let bus: EventBus = EventBus::new();
        bus.notify("");
    }

    #[test]
    fn test_debug_flag_defaults_off() {
        let bus: EventBus = EventBus::new();
        assert!(!bus.is_debug());
        bus.debug(true);
        assert!(bus.is_debug());
        bus.debug(false);
        assert!(!bus.is_debug());
    }
}
