use serde::{Deserialize, Serialize};

/// A financial accounting standard (AAOIFI) with parallel English/Arabic titles.
/// Loaded once from `standards.json`; immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standard {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
}

impl Standard {
    pub fn title(&self, language: Language) -> &str {
        match language {
            Language::English => &self.title_en,
            Language::Arabic => &self.title_ar,
        }
    }
}

/// A worked scenario tied to one standard by `standard_id`.
/// The link is not validated at load time; a missing standard or example
/// surfaces as a lookup miss when a request needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub standard_id: String,
    pub scenario_en: String,
    pub scenario_ar: String,
}

impl Example {
    pub fn scenario(&self, language: Language) -> &str {
        match language {
            Language::English => &self.scenario_en,
            Language::Arabic => &self.scenario_ar,
        }
    }
}

/// Glossary entries are free-form records. The core never addresses them
/// individually, so they pass through untyped.
pub type GlossaryEntry = serde_json::Value;

/// Prompt language for the bilingual templates.
/// Any request value other than "English" selects the Arabic templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        if value == "English" {
            Language::English
        } else {
            Language::Arabic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_defaults_to_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn non_english_selects_arabic() {
        assert_eq!(Language::from("Arabic".to_string()), Language::Arabic);
        assert_eq!(Language::from("العربية".to_string()), Language::Arabic);
        assert_eq!(Language::from("english".to_string()), Language::Arabic);
        assert_eq!(Language::from("English".to_string()), Language::English);
    }

    #[test]
    fn title_and_scenario_follow_language() {
        let standard = Standard {
            id: "FAS-28".to_string(),
            title_en: "Murabaha".to_string(),
            title_ar: "المرابحة".to_string(),
        };
        assert_eq!(standard.title(Language::English), "Murabaha");
        assert_eq!(standard.title(Language::Arabic), "المرابحة");

        let example = Example {
            standard_id: "FAS-28".to_string(),
            scenario_en: "A bank purchases equipment".to_string(),
            scenario_ar: "يشتري البنك معدات".to_string(),
        };
        assert_eq!(example.scenario(Language::Arabic), "يشتري البنك معدات");
    }
}
