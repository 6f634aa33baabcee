use gloo::console;

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::format(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_prefixes_component() {
        assert_eq!(Logger::format("orders", "loaded 3 rows"), "[orders] loaded 3 rows");
    }
}
