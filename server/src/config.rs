use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Directory holding the built front-end assets.
    pub dist_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            dist_dir: try_load("DIST_DIR", "dist"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        // Unset variables fall back to the documented defaults.
        let port: u16 = try_load("KEBAB_EXPRESS_UNSET_PORT", "3000");
        let dist: PathBuf = try_load("KEBAB_EXPRESS_UNSET_DIST", "dist");

        assert_eq!(port, 3000);
        assert_eq!(dist, PathBuf::from("dist"));
    }
}
