use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

const DEFAULT_EXPO_PUSH_URL: &str = "https://exp.host/--/api/v2/push/send";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_service_role_key: String,

    /// Optional provider credential; unauthenticated sends work at reduced quota.
    #[serde(default)]
    pub expo_access_token: Option<String>,

    #[serde(default = "default_expo_push_url")]
    pub expo_push_url: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

fn default_expo_push_url() -> String {
    DEFAULT_EXPO_PUSH_URL.to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }
}
