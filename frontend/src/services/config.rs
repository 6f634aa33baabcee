use admin_domain::AdminConfig;
use anyhow::{anyhow, Context};

use crate::services::logging::Logger;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "admin-config";

/// Configuration from the host page, or the defaults when there is none
pub fn load_admin_config() -> AdminConfig {
    match read_inline_config() {
        Ok(Some(config)) => {
            Logger::debug_with_component("config", &format!("Using API at {}", config.api_root()));
            config
        }
        Ok(None) => AdminConfig::default(),
        Err(err) => {
            Logger::warn_with_component("config", &format!("Falling back to defaults: {:#}", err));
            AdminConfig::default()
        }
    }
}

fn read_inline_config() -> anyhow::Result<Option<AdminConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("No document available"))?;

    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    parse_inline_config(&element.text_content().unwrap_or_default())
}

fn parse_inline_config(json: &str) -> anyhow::Result<Option<AdminConfig>> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    let config = AdminConfig::from_json(json).context("Invalid inline admin configuration")?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_blank_document_means_defaults() {
        assert!(parse_inline_config("  \n").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_partial_document_keeps_other_defaults() {
        let config = parse_inline_config(r#"{"page_size": 25}"#).unwrap().unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.api_base_url, AdminConfig::default().api_base_url);
    }

    #[wasm_bindgen_test]
    fn test_invalid_document_is_reported() {
        let err = parse_inline_config(r#"{"page_size": 0}"#).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Invalid inline admin configuration"));
    }

    #[wasm_bindgen_test]
    fn test_missing_element_means_defaults() {
        assert_eq!(load_admin_config(), AdminConfig::default());
    }
}
