use crate::dashboard::ui::Dashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (sidebar, chat) is shared app-wide via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <Shell>
                <Dashboard/>
            </Shell>
        </ThemeProvider>
    }
}
