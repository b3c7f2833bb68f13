//! View-model logic with no browser dependencies.

pub mod badges;
pub mod dashboard;
pub mod filters;
pub mod forms;
pub mod reports;
pub mod status_actions;
pub mod week_grid;
