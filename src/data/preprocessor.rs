// ============================================================
// Layer 4 — Line Preprocessor
// ============================================================
// Turns one raw input line into prompt text.
//
// A prompt is compared by its exact text, so cleaning only
// touches the ends of the line:
//   1. Strip a byte order mark (editors on Windows put one at
//      the start of the file)
//   2. Trim leading and trailing whitespace, including '\r'
//
// Everything inside the line is kept as typed: "a  b" and
// "a b" are two different prompts. LaTeX collapses inner
// spaces when typesetting anyway.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a single line. An all-whitespace line becomes "".
    pub fn clean_line(&self, line: &str) -> String {
        line.trim_start_matches('\u{FEFF}').trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_edges() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line("  kan lide Haskell \t"), "kan lide Haskell");
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line("har\t\tbrugt   Vim"), "har\t\tbrugt   Vim");
    }

    #[test]
    fn test_strips_bom() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line("\u{FEFF}  kører Arch"), "kører Arch");
    }

    #[test]
    fn test_carriage_return_removed() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line("line\r"), "line");
    }

    #[test]
    fn test_preserves_non_ascii() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line("Første fulde plade får en Ølefant"), "Første fulde plade får en Ølefant");
    }

    #[test]
    fn test_blank_line() {
        let p = Preprocessor::new();
        assert_eq!(p.clean_line(" \t \u{00A0} "), "");
    }
}
