//! NovaTV landing page: Yew markup plus the browser behaviors bound to it.

pub mod behavior {
    pub mod menu;
    pub mod reveal;
    pub mod selection;
    pub mod stats;
    pub mod viewport;
}
pub mod carousel;
pub mod components {
    pub mod hero;
    pub mod navbar;
    pub mod rail;
}
pub mod config;
pub mod controllers;
pub mod error;
pub mod i18n;
pub mod pages {
    pub mod landing;
}

pub use controllers::LandingController;
pub use error::PageError;
