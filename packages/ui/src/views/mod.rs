mod home;
pub use home::HomeView;

mod about;
pub use about::AboutView;
