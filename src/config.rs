use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub attempts_count: usize,
    pub timeout_sec: u64,
    pub parallel_limit: usize,
    pub listen_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let attempts_count = env::var("ATTEMPTS_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(5);
        let timeout_sec = env::var("TIMEOUT_SEC").ok().and_then(|v| v.parse().ok()).unwrap_or(10);
        let parallel_limit = env::var("PARALLEL_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(100);
        let listen_port = env::var("LISTEN_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(10_007);
        Self { attempts_count, timeout_sec, parallel_limit, listen_port }
    }
}
