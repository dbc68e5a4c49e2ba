pub mod auth;
pub mod films;

pub use auth::AuthService;
pub use films::FilmService;
