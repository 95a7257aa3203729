pub mod main_window;
pub mod paper;
pub mod theme;
