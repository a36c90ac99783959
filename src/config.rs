use std::env;

#[derive(Clone, Debug)]
pub struct Configuration {
    database_url: String,
    database_pool_size: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            database_url: String::from("catalogue.sqlite3"),
            database_pool_size: 4,
        }
    }

    pub fn database_url(&self) -> &str {
        self.database_url.as_ref()
    }

    pub fn database_pool_size(&self) -> u32 {
        self.database_pool_size
    }

    pub fn with_database_url<T: Into<String>>(mut self, database_url: T) -> Configuration {
        self.database_url = database_url.into();
        self
    }

    pub fn with_database_pool_size(mut self, size: u32) -> Configuration {
        self.database_pool_size = size.max(1);
        self
    }

    /// Overrides the defaults from the environment, reading `.env` first if present.
    /// Unparseable numbers leave the current value in place.
    pub fn from_environment(mut self) -> Configuration {
        dotenv::dotenv().ok();
        if let Ok(database_url) = env::var("DATABASE_URL") {
            self.database_url = database_url
        }
        if let Ok(pool_size_s) = env::var("DATABASE_POOL_SIZE") {
            match pool_size_s.parse::<u32>() {
                Ok(pool_size) if pool_size > 0 => self.database_pool_size = pool_size,
                _ => warn!("ignoring DATABASE_POOL_SIZE={:?}", pool_size_s),
            }
        }
        self
    }
}
