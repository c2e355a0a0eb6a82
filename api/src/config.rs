use ivr_core::{IvrConfig, SweeperConfig, VerificationStoreConfig};
use ivr_infra::config::SmsConfig;
use ivr_shared::config::AppConfig;

/// Everything the server needs at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub sms: SmsConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let app = AppConfig::from_env();
        let sms = SmsConfig::from_env(app.environment);
        Self { app, sms }
    }

    pub fn is_production(&self) -> bool {
        self.app.environment.is_production()
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }

    pub fn store_config(&self) -> VerificationStoreConfig {
        VerificationStoreConfig::from(&self.app.verification)
    }

    pub fn sweeper_config(&self) -> SweeperConfig {
        SweeperConfig::from(&self.app.verification)
    }

    pub fn ivr_config(&self) -> IvrConfig {
        IvrConfig::from(&self.app.business)
    }
}
