mod event;
mod listener;
mod properties;
mod resize;

pub use self::event::EventType;
pub use self::listener::{EventFn, EventListener};
pub use self::properties::PropertyBag;
pub use self::resize::{ResizeFn, ResizeWatcher};
