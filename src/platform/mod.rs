//! Platform abstraction layer
//!
//! Maps raw host events onto the simulation's single "activate" signal.
//! Debouncing and default-action suppression (touch scrolling) stay with the
//! host; this layer only decides which events count.

/// Raw input as reported by the host surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Click,
    TouchStart,
    /// Physical key code, e.g. "Space" or "KeyA"
    KeyDown(String),
}

/// Key code that flaps
pub const ACTIVATE_KEY: &str = "Space";

/// Whether an event should be delivered as `activate`
pub fn is_activation(event: &HostEvent) -> bool {
    match event {
        HostEvent::Click | HostEvent::TouchStart => true,
        HostEvent::KeyDown(code) => code == ACTIVATE_KEY,
    }
}

/// Start-screen hint for the device
pub fn start_prompt(touch_capable: bool) -> &'static str {
    if touch_capable {
        "Tap to start and jump"
    } else {
        "Click or press Space to start and jump"
    }
}
