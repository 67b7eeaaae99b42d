mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod search;
pub use search::Search;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;
