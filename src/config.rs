use std::env;

const DEFAULT_BASE_URL: &str = "https://mip.cvcrm.com.br";

pub struct Config {
    pub base_url: String,
    pub email: String,
    pub token: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            base_url: env::var("CVCRM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            email: env::var("CVCRM_EMAIL")?,
            token: env::var("CVCRM_TOKEN")?,
        })
    }
}
