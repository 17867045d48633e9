pub mod relay;
pub mod settings;
