// Collection Browser
// Filtered view over a user's resumes plus the dashboard session that owns the
// loaded list, and the HTTP handlers that drive both.

pub mod filter;
pub mod handlers;
pub mod session;

pub use filter::TemplateFilter;
pub use session::DashboardSession;
