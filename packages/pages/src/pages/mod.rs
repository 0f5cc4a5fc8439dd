//! One module per page.

pub mod about;
pub mod alerts;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod report;

pub use about::{AboutTab, about_page};
pub use alerts::{CenterTab, alert_center_page, alert_delete_page, alert_form_page};
pub use dashboard::{DashboardData, DashboardTab, dashboard_page};
pub use home::home_page;
pub use not_found::not_found_page;
pub use report::{report_page, report_submitted_page};
