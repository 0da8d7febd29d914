use std::env;
use std::fs;
use std::path::Path;

// Claves que config.rs lee con option_env!
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "BACKEND_URL_DEVELOPMENT",
    "BACKEND_URL_PRODUCTION",
    "ENABLE_LOGGING",
    "NETWORK_TIMEOUT_SECONDS",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "FLIGHTS_LIMIT",
    "TOP_REGIONS_LIMIT",
];

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables desde .env si existe; el entorno real tiene prioridad
    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim().trim_start_matches("export ").trim();

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=.env: clave desconocida {} ignorada", key);
                    continue;
                }
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, unquote(value));
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using defaults (same-origin backend). Copy .env.example to .env to configure.");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
