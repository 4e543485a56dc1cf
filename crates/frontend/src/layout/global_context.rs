use leptos::prelude::*;

/// App-wide layout state shared by the shell, header, and sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile sidebar drawer
    pub sidebar_open: RwSignal<bool>,
    /// Desktop sidebar collapse
    pub sidebar_collapsed: RwSignal<bool>,
    /// Floating chat window
    pub chat_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
            sidebar_collapsed: RwSignal::new(false),
            chat_open: RwSignal::new(false),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
