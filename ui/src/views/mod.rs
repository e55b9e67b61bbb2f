mod landing;
pub use landing::{LandingPage, LocaleEvent};
