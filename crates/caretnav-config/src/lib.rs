pub mod config;

pub use config::NavigationConfig;
