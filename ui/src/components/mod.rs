mod countdown_display;
mod demo_modal;
mod gallery_grid;
mod language_menu;
mod signup_form;
mod site_navbar;
mod slideshow;

pub use countdown_display::CountdownDisplay;
pub use demo_modal::DemoModal;
pub use gallery_grid::GalleryGrid;
pub use language_menu::LanguageMenu;
pub use signup_form::SignupForm;
pub use site_navbar::SiteNavbar;
pub use slideshow::Slideshow;
