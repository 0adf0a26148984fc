use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    /// Join every catalog challenge on signup
    pub auto_join_challenges: bool,
    pub cors_allowed_origins: Vec<String>,
}

const DEV_JWT_SECRET: &str = "coachsmart-dev-secret";

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://coachsmart.db?mode=rwc".to_string(),
            port: 8000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            session_ttl_hours: 24,
            auto_join_challenges: false,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                defaults.jwt_secret.clone()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret,
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(defaults.session_ttl_hours),
            auto_join_challenges: env::var("AUTO_JOIN_CHALLENGES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.auto_join_challenges),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
