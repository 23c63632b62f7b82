pub mod analytics;
pub mod api_utils;
pub mod config;
pub mod http;
pub mod icons;
pub mod storage;
pub mod theme;

#[cfg(test)]
pub mod testing;
