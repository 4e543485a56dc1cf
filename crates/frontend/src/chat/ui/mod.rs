pub mod window;

pub use window::ChatWindow;
