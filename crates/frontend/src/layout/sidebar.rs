//! Report list sidebar.
//!
//! Fetches the report metadata once on mount, filters it client-side,
//! and emits selection events upward. The sidebar never owns the
//! selection itself.

use crate::layout::global_context::use_global_context;
use crate::reports::api;
use crate::shared::icons::icon;
use contracts::reports::Report;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn Sidebar(
    /// Id of the currently selected report, for highlighting
    #[prop(into)]
    selected_id: Signal<Option<String>>,
    /// Report id restored from the URL, selected once the list loads
    #[prop(optional_no_strip)]
    initial_report: Option<String>,
    on_select: Callback<Report>,
) -> impl IntoView {
    let ctx = use_global_context();

    let (reports, set_reports) = signal(Vec::<Report>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (filter_input, set_filter_input) = signal(String::new());
    let (filter_text, set_filter_text) = signal(String::new());
    let debounce_seq = StoredValue::new(0u64);

    spawn_local(async move {
        match api::fetch_reports().await {
            Ok(list) => {
                if let Some(wanted) = initial_report {
                    if let Some(report) = list.iter().find(|r| r.id == wanted) {
                        on_select.run(report.clone());
                    }
                }
                set_reports.set(list);
                set_loading.set(false);
            }
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
            }
        }
    });

    // Debounced filter: only the latest keystroke's timer applies it.
    let handle_input = move |value: String| {
        set_filter_input.set(value.clone());
        let seq = debounce_seq.with_value(|s| *s) + 1;
        debounce_seq.set_value(seq);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(200).await;
            if debounce_seq.with_value(|s| *s) == seq {
                set_filter_text.set(value);
            }
        });
    };

    let filtered_reports = move || {
        let filter = filter_text.get().to_lowercase();
        reports
            .get()
            .into_iter()
            .filter(|report| {
                filter.is_empty()
                    || report.name.to_lowercase().contains(&filter)
                    || report.description.to_lowercase().contains(&filter)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="sidebar">
            <div class="sidebar__top">
                <h2 class="sidebar__brand">"Analytics"</h2>
                <button
                    class="icon-button sidebar__close"
                    on:click=move |_| ctx.sidebar_open.set(false)
                >
                    {icon("x")}
                </button>
            </div>

            <div class="sidebar__search">
                <input
                    type="text"
                    placeholder="Filter reports..."
                    prop:value=move || filter_input.get()
                    on:input=move |ev| handle_input(event_target_value(&ev))
                />
            </div>

            <div class="sidebar__list">
                {move || {
                    loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="sidebar__pending">
                                    <Spinner/>
                                </div>
                            }
                        })
                }}

                {move || {
                    error.get().map(|e| view! { <div class="sidebar__error">{e}</div> })
                }}

                <ul>
                    <For
                        each=filtered_reports
                        key=|report| report.id.clone()
                        children=move |report: Report| {
                            let report_id = report.id.clone();
                            let name = report.name.clone();
                            let description = report.description.clone();
                            let is_active = move || {
                                selected_id.get().as_deref() == Some(report_id.as_str())
                            };
                            let pick = report.clone();
                            view! {
                                <li>
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "sidebar__item sidebar__item--active"
                                            } else {
                                                "sidebar__item"
                                            }
                                        }
                                        on:click=move |_| {
                                            on_select.run(pick.clone());
                                            ctx.sidebar_open.set(false);
                                        }
                                    >
                                        <div class="sidebar__item-text">
                                            <h3>{name.clone()}</h3>
                                            <p>{description.clone()}</p>
                                        </div>
                                        {icon("chevron-right")}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
