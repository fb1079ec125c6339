//! Question-answering flow - View Component

use super::model::ask_question;
use crate::session::SessionVm;
use contracts::chat::{ask_preconditions, ChatMessage, ChatRole};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<SessionVm>();
    // Chat state lives in the session so picking a new file can clear it.
    let vm = session.chat;
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Button and Enter key both land here.
    let handle_send = Callback::new(move |_| {
        let question = vm.question.get().trim().to_string();
        let document_id = session.document_id();

        // Local preconditions; nothing reaches the network on failure.
        if let Err(notice) = ask_preconditions(document_id.as_deref(), &question) {
            vm.error.set(Some(notice));
            return;
        }
        let Some(filename) = document_id else {
            return;
        };

        // Optimistic append. The user message stays in the transcript even
        // if the answer fails; only the error region reports the failure.
        session.push_message(ChatMessage::user(question.clone()));
        scroll_to_bottom();
        vm.is_asking.set(true);
        vm.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match ask_question(&question, &filename).await {
                Ok(resp) if resp.success => match resp.answer {
                    Some(answer) => {
                        session.push_message(ChatMessage::assistant(answer));
                        vm.question.set(String::new());
                        scroll_to_bottom();
                    }
                    None => vm.error.set(Some(resp.error_message())),
                },
                Ok(resp) => vm.error.set(Some(resp.error_message())),
                Err(e) => {
                    log::error!("ask request failed: {}", e);
                    vm.error.set(Some(format!("Question failed: {}", e)));
                }
            }
            vm.is_asking.set(false);
        });
    });

    view! {
        <section style="display: flex; flex-direction: column; gap: 12px;">
            <h2 style="font-size: 18px; font-weight: bold;">"Ask about the document"</h2>

            <div
                node_ref=messages_container_ref
                style="max-height: 360px; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || session.transcript.get()
                    key=|msg| msg.id.to_string()
                    let:msg
                >
                    {{
                        let is_user = msg.role == ChatRole::User;
                        view! {
                            <div
                                style=if is_user {
                                    "align-self: flex-end; max-width: 70%;"
                                } else {
                                    "align-self: flex-start; max-width: 70%;"
                                }
                            >
                                <div
                                    style=if is_user {
                                        "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                                    } else {
                                        "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                                    }
                                >
                                    // Text interpolation escapes; pre-wrap keeps
                                    // embedded newlines visible.
                                    <div style="white-space: pre-wrap;">{msg.content.clone()}</div>
                                    <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                                        {msg.sent_at.format("%H:%M").to_string()}
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </For>

                {move || {
                    vm.is_asking
                        .get()
                        .then(|| {
                            view! {
                                <span style="align-self: flex-start; color: var(--colorNeutralForeground3);">
                                    "Thinking..."
                                </span>
                            }
                        })
                }}
            </div>

            <Flex style="gap: 8px;" align=FlexAlign::Center>
                <div style="flex: 1;">
                    <Input
                        value=vm.question
                        placeholder="Ask a question about the PDF... (Enter to send)"
                        attr:style="width: 100%;"
                        disabled=vm.is_asking
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_asking
                    on_click=move |_| handle_send.run(())
                >
                    {move || if vm.is_asking.get() { "Sending..." } else { "Send" }}
                </Button>
            </Flex>

            // Question errors stay next to the chat input.
            {move || {
                vm.error
                    .get()
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
