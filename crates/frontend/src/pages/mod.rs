//! Page components.

mod add_property;
mod admin;
mod agent;
mod contact;
mod customer;
mod home;
mod login;
mod signup;

pub use add_property::AddPropertyPage;
pub use admin::AdminDashboardPage;
pub use agent::AgentDashboardPage;
pub use contact::ContactPage;
pub use customer::CustomerDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;
