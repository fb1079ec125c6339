//! Question-answering flow - View Model

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub question: RwSignal<String>,
    pub is_asking: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            question: RwSignal::new(String::new()),
            is_asking: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Clear the input and error state tied to the previous document.
    /// `is_asking` is left alone; an in-flight request settles on its own.
    pub fn reset(&self) {
        self.question.set(String::new());
        self.error.set(None);
    }
}
