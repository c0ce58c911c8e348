pub mod commands;
pub mod modules;

pub use modules::common::error::IconkeepError;
pub use modules::common::utils;
pub use modules::icon;
pub use modules::keeper;
pub use modules::locator;
pub use modules::metadata;
pub use modules::store;
