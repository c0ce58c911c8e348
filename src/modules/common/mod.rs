pub mod error;
pub mod logging;
pub mod paths;
pub mod utils;

#[cfg(test)]
pub mod testing;
