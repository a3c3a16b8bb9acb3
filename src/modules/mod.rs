pub mod analytics;
pub mod auth;
pub mod carousel;
pub mod content;
pub mod message;
pub mod portfolio;
