pub mod common;
pub mod config;
pub mod icon;
pub mod keeper;
pub mod locator;
pub mod metadata;
pub mod store;
