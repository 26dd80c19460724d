mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod register;
pub use register::Register;
