//! Summary view selector - View Component
//!
//! Pure rendering of the cached summaries for the variant the user picked.
//! Tabs and the dropdown both write the same signal, so either entry path
//! ends in the same visible state.

use crate::session::SessionVm;
use contracts::document::SummaryVariant;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SummaryPanel() -> impl IntoView {
    let session = expect_context::<SessionVm>();

    view! {
        <section style="display: flex; flex-direction: column; gap: 12px; padding: 16px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex style="gap: 8px;">
                    {SummaryVariant::ALL
                        .into_iter()
                        .map(|variant| {
                            view! {
                                <Button
                                    appearance=Signal::derive(move || {
                                        if session.active_variant.get() == variant {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    })
                                    on_click=move |_| session.active_variant.set(variant)
                                >
                                    {variant.title()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Flex>

                <select
                    style="padding: 6px 10px; border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;"
                    prop:value=move || session.active_variant.get().as_str().to_string()
                    on:change=move |ev| {
                        if let Ok(variant) = SummaryVariant::from_str(&event_target_value(&ev)) {
                            session.active_variant.set(variant);
                        }
                    }
                >
                    {SummaryVariant::ALL
                        .into_iter()
                        .map(|variant| {
                            view! { <option value=variant.as_str()>{variant.title()}</option> }
                        })
                        .collect_view()}
                </select>
            </Flex>

            <h2 style="font-size: 18px; font-weight: bold;">
                {move || session.active_variant.get().title()}
            </h2>

            // pre-wrap keeps bullet newlines visible without any markup.
            <div style="white-space: pre-wrap; line-height: 1.5;">
                {move || {
                    let variant = session.active_variant.get();
                    session
                        .document
                        .get()
                        .map(|doc| doc.display_text(variant).to_string())
                        .unwrap_or_default()
                }}
            </div>
        </section>
    }
}
