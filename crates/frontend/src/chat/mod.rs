//! Question-answering flow over the uploaded document.

pub mod model;
pub mod view;
pub mod view_model;
