mod home;
pub use home::HomeView;

mod search;
pub use search::SearchView;

mod profile;
pub use profile::ProfileView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;
