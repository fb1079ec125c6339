//! Summary view selector.

pub mod view;
