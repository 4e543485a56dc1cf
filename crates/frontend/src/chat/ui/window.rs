//! Chat window posting free-text queries to the reports assistant.

use crate::chat::api;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen_futures::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    fn user(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::User,
            text,
            is_error: false,
        }
    }

    fn bot(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text,
            is_error: false,
        }
    }

    fn error(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            text,
            is_error: true,
        }
    }

    fn css_class(&self) -> &'static str {
        match (self.sender, self.is_error) {
            (Sender::User, _) => "chat__message chat__message--user",
            (Sender::Bot, false) => "chat__message chat__message--bot",
            (Sender::Bot, true) => "chat__message chat__message--bot chat__message--error",
        }
    }
}

#[component]
pub fn ChatWindow(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let (input_value, set_input_value) = signal(String::new());
    let (is_sending, set_is_sending) = signal(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = move || {
        let query = input_value.get_untracked();
        if query.trim().is_empty() || is_sending.get_untracked() {
            return;
        }

        messages.update(|msgs| msgs.push(ChatMessage::user(query.clone())));
        set_input_value.set(String::new());
        set_is_sending.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            let reply = match api::send_chat_query(&query).await {
                Ok(response) => {
                    if let Some(generated) = &response.generated_query {
                        log::debug!("generated query: {generated}");
                    }
                    ChatMessage::bot(
                        response
                            .natural_language_response
                            .filter(|s| !s.is_empty())
                            .unwrap_or_else(|| "Sorry, I couldn't process that.".to_string()),
                    )
                }
                Err(message) => ChatMessage::error(message),
            };
            messages.update(|msgs| msgs.push(reply));
            set_is_sending.set(false);
            scroll_to_bottom();
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="chat">
                <div class="chat__header">
                    <h3>"Assistant"</h3>
                    <button class="icon-button" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="chat__messages" node_ref=messages_ref>
                    {move || {
                        (messages.get().is_empty() && !is_sending.get())
                            .then(|| {
                                view! {
                                    <div class="chat__welcome">
                                        "Hi there! Ask me anything about your reports."
                                    </div>
                                }
                            })
                    }}
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id
                        children=move |msg: ChatMessage| {
                            view! { <div class=msg.css_class()>{msg.text.clone()}</div> }
                        }
                    />
                    {move || {
                        is_sending
                            .get()
                            .then(|| {
                                view! {
                                    <div class="chat__message chat__message--bot chat__message--pending">
                                        "Thinking..."
                                    </div>
                                }
                            })
                    }}
                </div>
                <form
                    class="chat__input-row"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        handle_send();
                    }
                >
                    <input
                        type="text"
                        class="chat__input"
                        placeholder="Type your question..."
                        prop:value=move || input_value.get()
                        on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        prop:disabled=move || is_sending.get()
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_sending.get())
                        on_click=move |_| handle_send()
                    >
                        {icon("send")}
                        "Send"
                    </Button>
                </form>
            </div>
        </Show>
    }
}
