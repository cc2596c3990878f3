use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
}

pub const DEFAULT_LANGUAGE: &str = "en";

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            code: "en",
            translation: include_str!("../translations/en.json"),
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_supported() {
        let languages = supported_languages();
        let info = languages.get(DEFAULT_LANGUAGE).unwrap();
        assert_eq!(info.code, DEFAULT_LANGUAGE);
    }

    #[test]
    fn translations_are_valid_json_with_page_sections() {
        for info in supported_languages().values() {
            let parsed: serde_json::Value = serde_json::from_str(info.translation).unwrap();
            for section in ["app", "login", "register", "dashboard", "error"] {
                assert!(parsed.get(section).is_some(), "{} lacks {section}", info.code);
            }
        }
    }
}
