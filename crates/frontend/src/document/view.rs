//! Upload flow - View Component

use super::model::upload_document;
use super::view_model::UploadVm;
use crate::session::SessionVm;
use contracts::document::{DocumentSummary, SelectedFile, PDF_MIME};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "pdf-file-input";

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel() -> impl IntoView {
    let session = expect_context::<SessionVm>();
    let vm = UploadVm::new();

    // Picker and drag-drop converge here. Validation is synchronous and
    // nothing touches the network until the user clicks Upload.
    let handle_file = move |file: web_sys::File| {
        let selected = SelectedFile::new(file.name(), file.size() as u64, file.type_());
        match selected.validate() {
            Ok(()) => {
                log::debug!("selected file: {} ({} bytes)", selected.name, selected.size);
                vm.error.set(None);
                vm.selected_name.set(Some(selected.name));
                vm.file.set(Some(file));
                // A new document invalidates the old summaries and chat.
                session.reset_document();
            }
            Err(e) => {
                vm.error.set(Some(e));
                vm.selected_name.set(None);
                vm.file.set(None);
            }
        }
    };

    let handle_upload = Callback::new(move |_| {
        let Some(file) = vm.file.get() else {
            return;
        };
        vm.is_uploading.set(true);
        vm.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            match upload_document(file).await {
                Ok(resp) if resp.success => match DocumentSummary::from_response(&resp) {
                    Ok(summary) => {
                        log::debug!("upload succeeded: {}", summary.filename);
                        session.document.set(Some(summary));
                    }
                    Err(e) => vm.error.set(Some(e)),
                },
                Ok(resp) => vm.error.set(Some(resp.error_message())),
                Err(e) => {
                    log::error!("upload request failed: {}", e);
                    vm.error.set(Some(format!("Upload failed: {}", e)));
                }
            }
            vm.is_uploading.set(false);
        });
    });

    let open_picker = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id(FILE_INPUT_ID) {
                    if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                        input.click();
                    }
                }
            }
        }
    };

    view! {
        <section style="display: flex; flex-direction: column; gap: 12px;">
            <input
                type="file"
                accept=PDF_MIME
                style="display: none;"
                id=FILE_INPUT_ID
                on:change=move |ev| {
                    let input: Option<web_sys::HtmlInputElement> =
                        ev.target().and_then(|t| t.dyn_into().ok());
                    if let Some(input) = input {
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            handle_file(file);
                        }
                        // Clear so re-selecting the same file fires change again
                        input.set_value("");
                    }
                }
            />

            <div
                style=move || {
                    let accent = if vm.is_drag_over.get() {
                        "border-color: var(--colorBrandStroke1); background: var(--colorBrandBackground2);"
                    } else {
                        "border-color: var(--colorNeutralStroke2); background: var(--colorNeutralBackground1);"
                    };
                    format!(
                        "border: 2px dashed; border-radius: 12px; padding: 32px; text-align: center; cursor: pointer; {}",
                        accent
                    )
                }
                on:click=open_picker
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.is_drag_over.set(true);
                }
                on:dragleave=move |_| vm.is_drag_over.set(false)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    vm.is_drag_over.set(false);
                    let file = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0));
                    if let Some(file) = file {
                        handle_file(file);
                    }
                }
            >
                {move || match vm.selected_name.get() {
                    Some(name) => view! {
                        <span style="font-weight: bold;">{name}</span>
                    }
                    .into_any(),
                    None => view! {
                        <span style="color: var(--colorNeutralForeground3);">
                            "Drop a PDF here or click to choose one (max 20 MB)"
                        </span>
                    }
                    .into_any(),
                }}
            </div>

            <Flex justify=FlexJustify::Center align=FlexAlign::Center style="gap: 12px;">
                <Show
                    when=move || !vm.is_uploading.get()
                    fallback=|| {
                        view! {
                            <span style="color: var(--colorNeutralForeground3);">
                                "Summarizing your document..."
                            </span>
                        }
                    }
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.selected_name.get().is_none())
                        on_click=move |_| handle_upload.run(())
                    >
                        "Upload & Summarize"
                    </Button>
                </Show>
            </Flex>

            // Upload errors stay next to the control that caused them.
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
