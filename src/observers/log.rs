//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] prints every dispatched event to stdout in a
//! human-readable format. Primarily useful for development, debugging, and
//! examples.
//!
//! ## Output format
//! ```text
//! [event] name=ping data={"v": Number(1)}
//! [event] name=pong
//! ```

use crate::events::Event;
use crate::observers::Observer;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Prints one line per event; the data
/// portion is omitted when the payload is empty.
///
/// Not intended for production use - implement a custom [`Observer`] for
/// structured logging or metrics collection.
pub struct LogObserver;

impl LogObserver {
    /// Renders the single output line for an event.
    fn format(event: &Event) -> String {
        if event.data.is_empty() {
            format!("[event] name={}", event.name)
        } else {
            format!("[event] name={} data={:?}", event.name, event.data.as_map())
        }
    }
}

impl Observer for LogObserver {
    fn on_event(&self, event: &Event) {
        println!("{}", Self::format(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Payload;

    #[test]
    fn test_format_omits_empty_data() {
        let ev: Event = Event::named("pong");
        assert_eq!(LogObserver::format(&ev), "[event] name=pong");
    }

    #[test]
    fn test_format_includes_data() {
        let ev = Event::new("ping", Payload::new().with("v", 1));
        let line = LogObserver::format(&ev);
        assert!(line.starts_with("[event] name=ping data="), "unexpected line: {line}");
        assert!(line.contains("\"v\""), "data key missing from line: {line}");
    }

    #[test]
    fn test_on_event_accepts_dispatched_events() {
        // Smoke: the observer is usable through the trait object surface.
        let obs: crate::ObserverRef = std::sync::Arc::new(LogObserver);
        obs.on_event(&Event::named("tick"));
    }
}
