use std::{env, path::PathBuf};

const SECRET_KEYS: [&str; 3] = ["WIFI_SSID", "WIFI_PASSWORD", "WEATHER_API_TOKEN"];

fn main() {
    // 1) Load optional env files (project first, then the per-user file)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".wifi-news.env");

    // 2) Provide fallbacks so the crate compiles without any secrets configured
    for key in SECRET_KEYS {
        let value = env::var(key).unwrap_or_default();
        if value.is_empty() {
            println!("cargo:warning={key} is not set; using empty string");
        }

        // 3) Expose as compile-time constants
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={key}");
    }

    println!("cargo:rerun-if-changed=.env");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    println!("cargo:rerun-if-changed={}", path.display());
    let _ = dotenvy::from_path(&path);
}
