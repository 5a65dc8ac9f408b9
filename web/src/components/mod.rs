pub mod city_input;
pub mod error;
pub mod loading;

// Re-export commonly used components
pub use city_input::CityInput;
