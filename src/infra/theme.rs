// ============================================================
// Layer 6 — Document Theme
// ============================================================
// The static text of the document: the title, the line shown
// above every board, and the rules page. None of it depends on
// the prompts. The defaults are the text of the
// Datalog Bingo event; a config file can replace any of it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentTheme {
    /// Shown on the rules page and on top of every board
    pub title: String,

    /// Lead-in line under the title on every board
    pub subtitle: String,

    /// Bold heading above the rule bullets
    pub rules_heading: String,

    /// One bullet per entry; an empty list drops the bullet list
    pub rules: Vec<String>,
}

impl Default for DocumentTheme {
    fn default() -> Self {
        Self {
            title:         "Datalog Bingo".to_string(),
            subtitle:      "Find en datalog som...".to_string(),
            rules_heading: "Regler:".to_string(),
            rules: vec![
                "Find personer, der matcher felterne. Hver felt dækker et aspekt af kulturen \
                 på datalogi, så hvis du vil lære hvad en datalog egentligt er, kan du også \
                 udspørge dig om hvad spørgsmålet egentligt handler om."
                    .to_string(),
                "Værten kan ikke bruges som match til nogen felter.".to_string(),
                "Man må ikke have gentagende personer som matches.".to_string(),
                "Få dem til at skrive deres navn eller initialer og tage et billede med dem \
                 (hvis de vil)."
                    .to_string(),
                "Første person med en fuld plade får en Ølefant.".to_string(),
            ],
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let theme: DocumentTheme = serde_json::from_str(r#"{ "title": "Office Bingo" }"#).unwrap();
        assert_eq!(theme.title, "Office Bingo");
        assert_eq!(theme.subtitle, DocumentTheme::default().subtitle);
        assert_eq!(theme.rules.len(), 5);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let res: Result<DocumentTheme, _> = serde_json::from_str(r#"{ "titel": "x" }"#);
        assert!(res.is_err());
    }
}
