pub mod components;
pub mod detail;
pub mod drawer;
pub mod for_you;
pub mod header;
pub mod history;
pub mod home;
pub mod loading;
pub mod login;
pub mod signup;
