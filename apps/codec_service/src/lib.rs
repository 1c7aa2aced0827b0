pub mod app_config;
pub mod app_module;
pub mod app_router;
pub mod codec;
pub mod telemetry;
