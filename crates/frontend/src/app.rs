use crate::chat::view::ChatPanel;
use crate::document::view::UploadPanel;
use crate::session::SessionVm;
use crate::summary::view::SummaryPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the page-lifetime session state to the whole app via context.
    let session = SessionVm::new();
    provide_context(session);

    view! {
        <div style="max-width: 860px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 24px;">
            <header style="text-align: center;">
                <h1 style="font-size: 26px; font-weight: bold; margin-bottom: 4px;">
                    "PDF Summarizer"
                </h1>
                <p style="color: var(--colorNeutralForeground3);">
                    "Upload a PDF to get a summary, then ask questions about it."
                </p>
            </header>

            <UploadPanel />

            // Summary region stays hidden until an upload succeeded.
            {move || {
                session
                    .document
                    .get()
                    .map(|_| view! { <SummaryPanel /> })
            }}

            <ChatPanel />
        </div>
    }
}
