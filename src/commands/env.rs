use ahmia_core::config::AppConfig;
use ahmia_core::{get_environment, is_development_environment};

pub fn run(config: &AppConfig) {
    println!("environment: {}", get_environment(&config.general));
    println!("is_development_environment: {}", is_development_environment(&config.general));
}
