//! Home view: stat cards, widget-driven charts, activity and tasks.

use super::activity_card::ActivityCard;
use super::tasks_card::TasksCard;
use crate::dashboard::api;
use crate::shared::chart::Chart;
use crate::shared::components::{Card, CardContent, CardHeader, StatCard};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::widgets::{Widget, WidgetData};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::Spinner;

/// Dashboard overview page.
///
/// The widget list is fetched once on mount; every widget's series is
/// then fetched independently so one slow or failing widget never blocks
/// the rest. A manual refresh restarts the whole round; responses from a
/// superseded round are discarded.
#[component]
pub fn Dashboard() -> impl IntoView {
    let (widgets, set_widgets) = signal(Vec::<Widget>::new());
    let (widgets_loading, set_widgets_loading) = signal(true);
    let (widgets_error, set_widgets_error) = signal(None::<String>);
    let series = RwSignal::new(HashMap::<String, Result<WidgetData, String>>::new());
    let generation = StoredValue::new(0u64);

    let load_widgets = move || {
        let round = generation.with_value(|g| *g) + 1;
        generation.set_value(round);
        set_widgets_loading.set(true);
        set_widgets_error.set(None);
        series.set(HashMap::new());
        spawn_local(async move {
            let result = api::fetch_widgets().await;
            if generation.with_value(|g| *g) != round {
                return;
            }
            match result {
                Ok(list) => {
                    set_widgets.set(list.clone());
                    set_widgets_loading.set(false);
                    for widget in list {
                        let widget_id = widget.id.clone();
                        spawn_local(async move {
                            let result = api::fetch_widget_data(&widget_id).await;
                            if generation.with_value(|g| *g) != round {
                                return;
                            }
                            series.update(|all| {
                                all.insert(widget_id, result);
                            });
                        });
                    }
                }
                Err(e) => {
                    set_widgets_error.set(Some(e));
                    set_widgets_loading.set(false);
                }
            }
        });
    };

    load_widgets();

    let today = Utc::now().date_naive().format("%B %e, %Y").to_string();

    view! {
        <div class="dashboard">
            <div class="dashboard__heading">
                <h1>"Dashboard"</h1>
                <p>"Welcome back, here's what's happening today."</p>
                <span class="dashboard__date">{today}</span>
            </div>

            <div class="dashboard__stats">
                <StatCard
                    title="Total Revenue".to_string()
                    value="$92,438".to_string()
                    icon_name="dollar-sign".to_string()
                    change=12.5
                    icon_class="stat-card__icon--blue"
                />
                <StatCard
                    title="Active Customers".to_string()
                    value="2,781".to_string()
                    icon_name="users".to_string()
                    change=3.2
                    icon_class="stat-card__icon--purple"
                />
                <StatCard
                    title="New Orders".to_string()
                    value="342".to_string()
                    icon_name="shopping-cart".to_string()
                    change={-1.8}
                    icon_class="stat-card__icon--emerald"
                />
                <StatCard
                    title="Growth Rate".to_string()
                    value="8.15%".to_string()
                    icon_name="trending-up".to_string()
                    change=2.3
                    icon_class="stat-card__icon--amber"
                />
            </div>

            <div class="dashboard__widgets-header">
                <h2>"Widgets"</h2>
                <button class="icon-button" title="Refresh widgets" on:click=move |_| load_widgets()>
                    {icon("refresh")}
                </button>
            </div>

            {move || {
                widgets_error
                    .get()
                    .map(|e| view! { <div class="error-banner">{e}</div> })
            }}

            {move || {
                widgets_loading
                    .get()
                    .then(|| {
                        view! {
                            <div class="dashboard__widgets-pending">
                                <Spinner/>
                            </div>
                        }
                    })
            }}

            <div class="dashboard__widgets">
                <For
                    each=move || widgets.get()
                    key=|widget| widget.id.clone()
                    children=move |widget: Widget| {
                        view! { <WidgetCard widget=widget series=series/> }
                    }
                />
            </div>

            <div class="dashboard__bottom">
                <ActivityCard/>
                <TasksCard/>
            </div>
        </div>
    }
}

/// One widget: card chrome plus its chart, with the widget's own
/// loading/error state inside the card body.
#[component]
fn WidgetCard(
    widget: Widget,
    series: RwSignal<HashMap<String, Result<WidgetData, String>>>,
) -> impl IntoView {
    let widget_id = widget.id.clone();
    let kind = widget.chart_type;

    let body = move || -> AnyView {
        match series.get().get(&widget_id).cloned() {
            None => view! {
                <div class="widget__pending">
                    <Spinner/>
                </div>
            }
            .into_any(),
            Some(Err(message)) => view! { <div class="error-banner">{message}</div> }.into_any(),
            Some(Ok(data)) => {
                let (values, labels) = data.series();
                view! {
                    <Chart
                        kind=Signal::derive(move || kind)
                        data=Signal::derive(move || values.clone())
                        labels=Signal::derive(move || labels.clone())
                    />
                }
                .into_any()
            }
        }
    };

    view! {
        <Card>
            <CardHeader title=widget.name.clone() subtitle=widget.description.clone()/>
            <CardContent>{body}</CardContent>
        </Card>
    }
}
