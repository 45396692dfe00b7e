use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The event a hosted custom element uses to talk back to its host.
    Custom,
}

impl EventType {
    /// The event name for use in JS listeners.
    pub fn as_str(&self) -> &'static str {
        use EventType::*;
        match self {
            Custom => "custom-event",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
