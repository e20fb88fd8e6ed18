//! egui rendering: control panels and chart regions.

pub mod panels;
pub mod plot;
