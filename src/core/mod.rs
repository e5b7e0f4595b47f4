pub mod event;
pub mod view;

pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
pub use view::EventResult;
