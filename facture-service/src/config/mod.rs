use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct FactureConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub company: CompanyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// Issuer identity and bank details printed on every document. Defaults
/// match the historical layout; production deployments set them explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    pub tax_id: String,
    pub website: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub bank_name: String,
    pub bank_account: String,
}

impl FactureConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common = core_config::Config::load()?;

        Ok(FactureConfig {
            common,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"))?,
                database: get_env("MONGODB_DATABASE", Some("facture_db"))?,
            },
            company: CompanyConfig {
                name: get_env("COMPANY_NAME", Some("Bureau de Consulting en Informatique"))?,
                tax_id: get_env("COMPANY_TAX_ID", Some("1912549Q/A/M/000"))?,
                website: get_env("COMPANY_WEBSITE", Some("www.acrecert.com"))?,
                email: get_env("COMPANY_EMAIL", Some("contact@acrecert.com"))?,
                address: get_env("COMPANY_ADDRESS", Some("Cheraf, Bekalta, Monastir"))?,
                phone: get_env("COMPANY_PHONE", Some("99 10 99 72 / 99 10 99 87"))?,
                bank_name: get_env("BANK_NAME", Some("UIB-Teboulba"))?,
                bank_account: get_env("BANK_ACCOUNT", Some("12 905 00 00033037045 84"))?,
            },
        })
    }
}
