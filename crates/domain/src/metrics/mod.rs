pub mod rolling_window;

pub use rolling_window::{DEFAULT_WINDOW_CAPACITY, RollingWindow};
