pub mod use_cleaning;
pub mod use_dashboard;
pub mod use_form;
pub mod use_notifications;
pub mod use_report;
pub mod use_surgery_detail;
pub mod use_surgery_history;
pub mod use_users;
pub mod use_week_schedule;
