use crate::shared::components::{Card, CardContent, CardHeader};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "task__priority task__priority--low",
            Priority::Medium => "task__priority task__priority--medium",
            Priority::High => "task__priority task__priority--high",
        }
    }
}

#[derive(Clone, PartialEq)]
struct Task {
    id: u32,
    title: &'static str,
    completed: bool,
    due: Option<&'static str>,
    priority: Priority,
}

fn initial_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Complete dashboard redesign",
            completed: true,
            due: Some("Today"),
            priority: Priority::High,
        },
        Task {
            id: 2,
            title: "Prepare presentation for client",
            completed: false,
            due: Some("Tomorrow"),
            priority: Priority::High,
        },
        Task {
            id: 3,
            title: "Review analytics report",
            completed: false,
            due: Some("Next week"),
            priority: Priority::Medium,
        },
        Task {
            id: 4,
            title: "Finalize project timeline",
            completed: false,
            due: None,
            priority: Priority::Medium,
        },
        Task {
            id: 5,
            title: "Fix navigation menu bug",
            completed: false,
            due: None,
            priority: Priority::Low,
        },
    ]
}

/// Pending-task list with client-side completion toggling.
#[component]
pub fn TasksCard() -> impl IntoView {
    let tasks = RwSignal::new(initial_tasks());

    let toggle_task = move |id: u32| {
        tasks.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
            }
        });
    };

    let add_task = view! { <button class="icon-button">{icon("plus-circle")}</button> }.into_any();

    view! {
        <Card>
            <CardHeader
                title="Tasks".to_string()
                subtitle="Your team's pending tasks".to_string()
                action=add_task
            />
            <CardContent class="card__content--flush">
                <ul class="task-list">
                    <For
                        each=move || tasks.get()
                        key=|task| (task.id, task.completed)
                        children=move |task: Task| {
                            let task_id = task.id;
                            view! {
                                <li class=if task.completed {
                                    "task task--completed"
                                } else {
                                    "task"
                                }>
                                    <button
                                        class="task__toggle"
                                        on:click=move |_| toggle_task(task_id)
                                    >
                                        {if task.completed {
                                            icon("check-circle")
                                        } else {
                                            icon("circle")
                                        }}
                                    </button>
                                    <div class="task__body">
                                        <p class="task__title">{task.title}</p>
                                        {task
                                            .due
                                            .map(|due| {
                                                view! {
                                                    <div class="task__due">
                                                        {icon("clock")}
                                                        <span>{format!("Due {due}")}</span>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                    <div class="task__meta">
                                        <span class=task
                                            .priority
                                            .badge_class()>{task.priority.label()}</span>
                                        {icon("chevron-right")}
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </CardContent>
        </Card>
    }
}
