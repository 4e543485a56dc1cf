use leptos::prelude::*;

/// Rounded content panel used across the dashboard.
#[component]
pub fn Card(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("card {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Optional action rendered on the right edge of the header.
    #[prop(optional, into)]
    action: Option<AnyView>,
) -> impl IntoView {
    view! {
        <div class="card__header">
            <div>
                <h3 class="card__title">{title}</h3>
                {subtitle.map(|s| view! { <p class="card__subtitle">{s}</p> })}
            </div>
            {action.map(|a| view! { <div class="card__action">{a}</div> })}
        </div>
    }
}

#[component]
pub fn CardContent(
    #[prop(optional, into)] class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || format!("card__content {}", class.get().unwrap_or_default())>
            {children()}
        </div>
    }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <div class="card__footer">{children()}</div> }
}
