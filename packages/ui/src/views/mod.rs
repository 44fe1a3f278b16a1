mod home;
pub use home::HomeView;

mod not_found;
pub use not_found::NotFoundView;
