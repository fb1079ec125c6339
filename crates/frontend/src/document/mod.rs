//! File intake, validation and the upload flow.

pub mod model;
pub mod view;
pub mod view_model;
