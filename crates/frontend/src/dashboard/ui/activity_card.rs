use crate::shared::components::{Card, CardContent, CardHeader};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum ActivityKind {
    Success,
    Warning,
    Info,
    Pending,
}

impl ActivityKind {
    fn badge_class(&self) -> &'static str {
        match self {
            ActivityKind::Success => "activity__badge activity__badge--success",
            ActivityKind::Warning => "activity__badge activity__badge--warning",
            ActivityKind::Info => "activity__badge activity__badge--info",
            ActivityKind::Pending => "activity__badge activity__badge--pending",
        }
    }

    fn status_icon(&self) -> &'static str {
        match self {
            ActivityKind::Success => "check-circle",
            ActivityKind::Warning => "alert-circle",
            ActivityKind::Info => "file-edit",
            ActivityKind::Pending => "clock",
        }
    }
}

struct ActivityItem {
    title: &'static str,
    description: &'static str,
    time: &'static str,
    kind: ActivityKind,
    icon: &'static str,
}

fn recent_activities() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            title: "New team member added",
            description: "Sarah Johnson joined the Design team",
            time: "2 hours ago",
            kind: ActivityKind::Success,
            icon: "user",
        },
        ActivityItem {
            title: "New comment on \"Q2 Planning\"",
            description: "David left a comment on the document",
            time: "4 hours ago",
            kind: ActivityKind::Info,
            icon: "message-square",
        },
        ActivityItem {
            title: "Project deadline updated",
            description: "Website redesign deadline changed to next week",
            time: "Yesterday at 4:30 PM",
            kind: ActivityKind::Warning,
            icon: "file-edit",
        },
        ActivityItem {
            title: "New document shared",
            description: "Marketing strategy document was shared with you",
            time: "Yesterday at 2:15 PM",
            kind: ActivityKind::Info,
            icon: "file-text",
        },
        ActivityItem {
            title: "Meeting scheduled",
            description: "Weekly team sync scheduled for tomorrow at 10 AM",
            time: "2 days ago",
            kind: ActivityKind::Pending,
            icon: "file-edit",
        },
    ]
}

/// Timeline of recent team activity.
#[component]
pub fn ActivityCard() -> impl IntoView {
    let activities = recent_activities();
    let last = activities.len().saturating_sub(1);

    let items = activities
        .into_iter()
        .enumerate()
        .map(|(i, activity)| {
            view! {
                <div class="activity__item">
                    <div class="activity__rail">
                        <div class=activity.kind.badge_class()>{icon(activity.icon)}</div>
                        {(i != last).then(|| view! { <div class="activity__connector"></div> })}
                    </div>
                    <div class="activity__body">
                        <div class="activity__heading">
                            <h4 class="activity__title">{activity.title}</h4>
                            <span class="activity__status">
                                {icon(activity.kind.status_icon())}
                            </span>
                        </div>
                        <p class="activity__description">{activity.description}</p>
                        <span class="activity__time">{activity.time}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    let view_all = view! { <button class="link-button">"View all"</button> }.into_any();

    view! {
        <Card>
            <CardHeader
                title="Recent Activity".to_string()
                subtitle="Latest activities from your team".to_string()
                action=view_all
            />
            <CardContent>
                <div class="activity">{items}</div>
            </CardContent>
        </Card>
    }
}
