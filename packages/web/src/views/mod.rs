mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub(crate) use dashboard::after_login;
pub use dashboard::{About, Cities, Countries, DashboardLayout, Home, NotFound, States, Users};
