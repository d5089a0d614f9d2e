use std::env::var;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub app_name: String,
    pub port: String,
    pub host: String,
    pub waafipay_env: String,
    pub waafipay_base_url: String,
    pub merchant_uid: String,
    pub api_user_id: String,
    pub api_key: String,
    pub currency: String,
    pub gateway_timeout_secs: u64,
    pub allowed_origin: Option<String>,
}

impl EnvConfig {
    pub fn init() -> EnvConfig {
        let waafipay_env = var("WAAFIPAY_ENV").unwrap_or(String::from("sandbox"));
        let default_base_url = if waafipay_env == "live" {
            String::from("https://api.waafipay.com")
        } else {
            String::from("https://sandbox.waafipay.com")
        };

        EnvConfig {
            app_name: var("APP_NAME").unwrap_or(String::from("waafipay-relay")),
            port: var("PORT").unwrap_or(String::from("3000")),
            host: var("HOST").unwrap_or(String::from("0.0.0.0")),
            waafipay_base_url: var("WAAFIPAY_BASE_URL").unwrap_or(default_base_url),
            waafipay_env,
            merchant_uid: var("WAAFIPAY_MERCHANT_UID").unwrap_or_default(),
            api_user_id: var("WAAFIPAY_API_USER_ID").unwrap_or_default(),
            api_key: var("WAAFIPAY_API_KEY").unwrap_or_default(),
            currency: var("WAAFIPAY_CURRENCY").unwrap_or(String::from("USD")),
            gateway_timeout_secs: var("WAAFIPAY_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .unwrap_or(15),
            allowed_origin: var("CORS_ALLOWED_ORIGIN").ok(),
        }
    }

    pub fn purchase_url(&self) -> String {
        format!("{}/asm", self.waafipay_base_url)
    }
}
