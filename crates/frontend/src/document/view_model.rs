//! Upload flow - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UploadVm {
    /// Name of the currently selected (and already validated) file.
    pub selected_name: RwSignal<Option<String>>,
    /// The raw browser file handle; JS values are not Send, hence local.
    pub file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub is_uploading: RwSignal<bool>,
    pub is_drag_over: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            selected_name: RwSignal::new(None),
            file: RwSignal::new_local(None),
            is_uploading: RwSignal::new(false),
            is_drag_over: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }
}
