//! Top-level shell: owns the selected report and all report-data
//! fetching; renders the sidebar, header, and either the selected report
//! view or the home children.

use crate::chat::ui::ChatWindow;
use crate::layout::global_context::use_global_context;
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::reports::api;
use crate::reports::state::create_state;
use crate::reports::ui::ReportTable;
use crate::shared::export::export_selected_rows;
use crate::shared::icons::icon;
use contracts::reports::{Report, ReportData};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_global_context();
    let state = create_state();

    let (report_data, set_report_data) = signal(None::<ReportData>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Every fetch gets a sequence number; a response is applied only if
    // no newer request has been issued since. Without this, a slow page-1
    // response can overwrite a fast page-2 response.
    let fetch_seq = StoredValue::new(0u64);

    let load = move |report_id: String, page: u32, count: u32| {
        let seq = fetch_seq.with_value(|s| *s) + 1;
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::fetch_report_data(&report_id, page, count).await;
            if fetch_seq.with_value(|s| *s) != seq {
                return;
            }
            match result {
                Ok(data) => {
                    set_report_data.set(Some(data));
                    set_loading.set(false);
                }
                Err(message) => {
                    set_report_data.set(None);
                    set_error.set(Some(message));
                    set_loading.set(false);
                }
            }
        });
    };

    let handle_select = Callback::new(move |report: Report| {
        let report_id = report.id.clone();
        let page_size = state.with_untracked(|s| s.page_size);
        state.update(|s| s.select_report(report));
        write_report_to_url(&report_id);
        ctx.sidebar_open.set(false);
        load(report_id, 1, page_size);
    });

    let handle_page_change = Callback::new(move |page: u32| {
        let (report_id, page_size) =
            state.with_untracked(|s| (s.report_id().map(str::to_string), s.page_size));
        let Some(report_id) = report_id else { return };
        state.update(|s| s.set_page(page));
        load(report_id, page.max(1), page_size);
    });

    // Changing the page size rewinds to page 1; that reset is this
    // component's job, not the table's.
    let handle_page_size_change = Callback::new(move |page_size: u32| {
        let report_id = state.with_untracked(|s| s.report_id().map(str::to_string));
        let Some(report_id) = report_id else { return };
        state.update(|s| s.set_page_size(page_size));
        load(report_id, 1, page_size);
    });

    let handle_toggle_row =
        Callback::new(move |row_id: String| state.update(|s| s.toggle_row(&row_id)));

    let handle_clear_selection =
        Callback::new(move |_: ()| state.update(|s| s.clear_selection()));

    let handle_export = Callback::new(move |_: ()| {
        let selected = state.with_untracked(|s| s.selected_ids.clone());
        let rows = report_data
            .get_untracked()
            .map(|d| d.data)
            .unwrap_or_default();
        if let Err(message) = export_selected_rows(&rows, &selected) {
            log::error!("export failed: {message}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    });

    let selected_id = Signal::derive(move || state.with(|s| s.report.as_ref().map(|r| r.id.clone())));
    let initial_report = report_from_url();

    let main_view = move || -> AnyView {
        let Some(report) = state.with(|s| s.report.clone()) else {
            return children();
        };
        view! {
            <div class="report-view">
                <h1 class="report-view__title">{report.name.clone()}</h1>
                <p class="report-view__description">{report.description.clone()}</p>
                <ReportTable
                    fields=Signal::derive(move || {
                        state.with(|s| s.report.as_ref().map(|r| r.fields.clone()).unwrap_or_default())
                    })
                    report_data=report_data
                    loading=loading
                    error=error
                    selected_ids=Signal::derive(move || state.with(|s| s.selected_ids.clone()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_toggle_row=handle_toggle_row
                    on_clear_selection=handle_clear_selection
                    on_export=handle_export
                    on_page_change=handle_page_change
                    on_page_size_change=handle_page_size_change
                />
            </div>
        }
        .into_any()
    };

    view! {
        <div class="app-layout">
            <div
                class=move || {
                    if ctx.sidebar_open.get() {
                        "backdrop backdrop--visible"
                    } else {
                        "backdrop"
                    }
                }
                on:click=move |_| ctx.sidebar_open.set(false)
            ></div>

            <aside class=move || {
                let mut cls = String::from("app-sidebar");
                if ctx.sidebar_open.get() {
                    cls.push_str(" app-sidebar--open");
                }
                if ctx.sidebar_collapsed.get() {
                    cls.push_str(" app-sidebar--collapsed");
                }
                cls
            }>
                <Sidebar
                    selected_id=selected_id
                    initial_report=initial_report
                    on_select=handle_select
                />
            </aside>

            <div class="app-main">
                <Header/>
                <main class="app-content">{main_view}</main>
            </div>

            <button
                class="chat-launcher"
                title="Assistant"
                on:click=move |_| ctx.chat_open.update(|open| *open = !*open)
            >
                {icon("message-square")}
            </button>
            <ChatWindow
                open=ctx.chat_open
                on_close=Callback::new(move |_| ctx.chat_open.set(false))
            />
        </div>
    }
}

/// Report id restored from the `?report=` query on startup.
fn report_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    params.get("report").cloned()
}

/// Mirrors the selected report into the URL without a navigation.
fn write_report_to_url(report_id: &str) {
    let query = serde_qs::to_string(&HashMap::from([(
        "report".to_string(),
        report_id.to_string(),
    )]))
    .unwrap_or_default();
    let new_url = format!("?{}", query);
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}
