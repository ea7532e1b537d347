mod event;
mod span;

pub use self::event::Event;
pub use self::span::{DateSpan, DateTimeSpan, TimeSpan};
