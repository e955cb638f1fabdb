use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "festpost.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientSettings {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub download_dir: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            request_timeout_secs: 120,
            download_dir: PathBuf::from("."),
        }
    }
}

pub fn load_settings() -> anyhow::Result<ClientSettings> {
    let file_raw = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file_raw.as_deref(), |key| std::env::var(key).ok())
}

/// Layers defaults, the settings file and environment overrides, in that order.
pub fn load_settings_from(
    file_raw: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Some(raw) = file_raw {
        let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?;
        if let Some(v) = file_cfg.get("api_url").and_then(toml::Value::as_str) {
            settings.api_url = v.to_string();
        }
        if let Some(v) = file_cfg.get("request_timeout_secs") {
            match v {
                toml::Value::Integer(secs) if *secs > 0 => {
                    settings.request_timeout_secs = *secs as u64;
                }
                toml::Value::String(secs) => {
                    settings.request_timeout_secs = parse_timeout(secs)?;
                }
                other => bail!("invalid request_timeout_secs in {SETTINGS_FILE}: {other}"),
            }
        }
        if let Some(v) = file_cfg.get("download_dir").and_then(toml::Value::as_str) {
            settings.download_dir = PathBuf::from(v);
        }
    }

    if let Some(v) = env("FESTPOST_API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = parse_timeout(&v)?;
    }

    if let Some(v) = env("APP__DOWNLOAD_DIR") {
        settings.download_dir = PathBuf::from(v);
    }

    settings.api_url = normalize_api_url(&settings.api_url)?;
    Ok(settings)
}

pub fn normalize_api_url(raw_api_url: &str) -> anyhow::Result<String> {
    let raw_api_url = raw_api_url.trim();
    if raw_api_url.is_empty() {
        return Ok(DEFAULT_API_URL.to_string());
    }

    let parsed =
        Url::parse(raw_api_url).with_context(|| format!("invalid api url '{raw_api_url}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("api url '{raw_api_url}' must use http or https");
    }

    Ok(raw_api_url.trim_end_matches('/').to_string())
}

fn parse_timeout(raw: &str) -> anyhow::Result<u64> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("invalid request timeout '{raw}'"))?;
    if secs == 0 {
        bail!("request timeout must be at least one second");
    }
    Ok(secs)
}
