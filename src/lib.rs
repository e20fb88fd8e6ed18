//! Launch records dashboard.
//!
//! A launch dataset is loaded once, then a site selector and a payload range
//! drive two charts: outcome proportions (pie) and payload against outcome
//! (scatter).  Each filter change is pushed through [`bindings`], which
//! rebuilds and replaces exactly the charts subscribed to that input.

pub mod app;
pub mod bindings;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod session;
pub mod state;
pub mod ui;
