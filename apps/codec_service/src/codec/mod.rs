pub mod codec_controller;
pub mod codec_error;
pub mod codec_service;
