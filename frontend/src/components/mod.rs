pub mod app;
pub mod cleaning_panel;
pub mod dashboard;
pub mod feedback;
pub mod form_fields;
pub mod header;
pub mod layout;
pub mod login;
pub mod notifications;
pub mod patient_intake;
pub mod reports;
pub mod sidebar;
pub mod status_badge;
pub mod status_chart;
pub mod surgery_detail;
pub mod surgery_form;
pub mod surgery_history;
pub mod surgery_schedule;
pub mod user_management;
