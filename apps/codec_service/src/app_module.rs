use crate::codec::codec_service::CodecService;

#[derive(Clone)]
pub struct AppService {
    pub codec_service: CodecService,
}

impl AppService {
    pub fn new() -> Self {
        let codec_service = CodecService::new();

        Self { codec_service }
    }
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            service: AppService::new(),
        }
    }
}
