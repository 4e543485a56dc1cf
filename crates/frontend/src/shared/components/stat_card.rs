use super::card::Card;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary figure with an icon and an optional week-over-week change.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    title: String,
    /// Formatted value string
    value: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Change % relative to the previous week
    #[prop(optional, into)]
    change: Option<f64>,
    /// Extra class on the icon badge (per-card accent color)
    #[prop(optional, into)]
    icon_class: MaybeProp<String>,
) -> impl IntoView {
    let change_view = change.map(|pct| {
        let (arrow, cls) = if pct > 0.0 {
            (Some(icon("trending-up")), "stat-card__change stat-card__change--up")
        } else if pct < 0.0 {
            (Some(icon("trending-down")), "stat-card__change stat-card__change--down")
        } else {
            (None, "stat-card__change stat-card__change--flat")
        };
        let text = if pct > 0.0 {
            format!("+{pct}%")
        } else {
            format!("{pct}%")
        };
        view! {
            <div class="stat-card__trend">
                <span class=cls>{arrow} {text}</span>
                <span class="stat-card__period">"vs last week"</span>
            </div>
        }
    });

    view! {
        <Card>
            <div class="stat-card">
                <div class=move || {
                    format!("stat-card__icon {}", icon_class.get().unwrap_or_default())
                }>{icon(&icon_name)}</div>
                <div class="stat-card__body">
                    <p class="stat-card__label">{title}</p>
                    <h3 class="stat-card__value">{value}</h3>
                    {change_view}
                </div>
            </div>
        </Card>
    }
}
