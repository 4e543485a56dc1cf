//! Top bar: sidebar toggles, search box, theme toggle, notifications,
//! profile menu.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let theme_ctx = use_theme();

    let (profile_open, set_profile_open) = signal(false);
    let (search_focused, set_search_focused) = signal(false);
    let (notifications, _set_notifications) = signal(3u32);

    // Click-outside handling for the profile dropdown: one document
    // listener, registered while the dropdown is open, deregistered on
    // close and on unmount.
    let outside_listener = StoredValue::new_local(None::<Closure<dyn FnMut(web_sys::MouseEvent)>>);

    let remove_outside_listener = move || {
        outside_listener.update_value(|slot| {
            if let Some(closure) = slot.take() {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    };

    Effect::new(move |_| {
        if profile_open.get() {
            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                set_profile_open.set(false);
            }) as Box<dyn FnMut(_)>);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            }
            outside_listener.set_value(Some(closure));
        } else {
            remove_outside_listener();
        }
    });

    on_cleanup(move || remove_outside_listener());

    view! {
        <header class="header">
            <div class="header__left">
                <button
                    class="icon-button header__menu-btn"
                    on:click=move |_| ctx.sidebar_open.set(true)
                >
                    {icon("menu")}
                </button>

                <button
                    class="icon-button header__collapse-btn"
                    on:click=move |_| ctx.sidebar_collapsed.update(|c| *c = !*c)
                    title=move || {
                        if ctx.sidebar_collapsed.get() {
                            "Expand sidebar"
                        } else {
                            "Collapse sidebar"
                        }
                    }
                >
                    {move || {
                        if ctx.sidebar_collapsed.get() {
                            icon("panel-left")
                        } else {
                            icon("panel-left-close")
                        }
                    }}
                </button>

                <div class=move || {
                    if search_focused.get() {
                        "header__search header__search--focused"
                    } else {
                        "header__search"
                    }
                }>
                    <span class="header__search-icon">{icon("search")}</span>
                    <input
                        type="text"
                        placeholder="Search..."
                        on:focus=move |_| set_search_focused.set(true)
                        on:blur=move |_| set_search_focused.set(false)
                    />
                </div>
            </div>

            <div class="header__right">
                <button
                    class="icon-button"
                    on:click=move |_| theme_ctx.toggle_theme()
                    title=move || {
                        if theme_ctx.theme.get() == Theme::Dark {
                            "Switch to light mode"
                        } else {
                            "Switch to dark mode"
                        }
                    }
                >
                    {move || {
                        if theme_ctx.theme.get() == Theme::Dark {
                            icon("sun")
                        } else {
                            icon("moon")
                        }
                    }}
                </button>

                <button class="icon-button header__bell" title="Notifications">
                    {icon("bell")}
                    {move || {
                        (notifications.get() > 0)
                            .then(|| {
                                view! {
                                    <span class="header__badge">{notifications.get()}</span>
                                }
                            })
                    }}
                </button>

                <div class="header__profile">
                    <button
                        class="header__profile-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_profile_open.update(|open| *open = !*open);
                        }
                    >
                        <span class="header__avatar">{icon("user")}</span>
                        <span class="header__profile-name">"Alex Morgan"</span>
                    </button>

                    <Show when=move || profile_open.get()>
                        <div class="header__dropdown" on:click=move |ev| ev.stop_propagation()>
                            <div class="header__dropdown-id">
                                <p class="header__dropdown-name">"Alex Morgan"</p>
                                <p class="header__dropdown-email">"alex.morgan@example.com"</p>
                            </div>
                            <div class="header__dropdown-items">
                                <a href="#" class="header__dropdown-item">
                                    {icon("user")}
                                    <span>"View Profile"</span>
                                </a>
                                <a href="#" class="header__dropdown-item">
                                    {icon("settings")}
                                    <span>"Settings"</span>
                                </a>
                                <a href="#" class="header__dropdown-item">
                                    {icon("help-circle")}
                                    <span>"Help Center"</span>
                                </a>
                                <hr/>
                                <a href="#" class="header__dropdown-item">
                                    {icon("log-out")}
                                    <span>"Log Out"</span>
                                </a>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
