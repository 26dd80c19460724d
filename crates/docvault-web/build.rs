use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct WebBootstrapConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=DOCVAULT_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=DOCVAULT_LOG_LEVEL");

    if let Err(error) = write_web_bootstrap_config() {
        println!("cargo:warning=failed to generate web bootstrap config: {error}");
    }
}

fn write_web_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = WebBootstrapConfig {
        api_base_url: env_var_trimmed("DOCVAULT_API_BASE_URL"),
        log_level: env_var_trimmed("DOCVAULT_LOG_LEVEL"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("web-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    println!("cargo:rerun-if-changed={}", candidate.display());
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
