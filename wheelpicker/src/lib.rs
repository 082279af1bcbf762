pub mod animation;
pub mod buffer;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod options;
pub mod picker;
pub mod render;
pub mod selection;
pub mod terminal;
pub mod text;
pub mod types;

pub use animation::{Easing, SettleAnimation};
pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{Rect, WheelLayout};
pub use options::{OptionList, OptionsError, PickerOption};
pub use picker::{ChangeEvent, ValueSource, WheelPicker};
pub use selection::{SelectionState, SnapResolution};
pub use terminal::Terminal;
pub use types::{Color, PickerTheme, Rgb, Style, TextStyle};
