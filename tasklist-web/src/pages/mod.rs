mod dashboard;
mod error;
pub mod login;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
