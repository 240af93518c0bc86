// ============================================================
// Layer 6 — LaTeX Document Renderer
// ============================================================
// Writes all boards into one LaTeX article:
//
//   preamble           landscape A4, sans-serif, roomy table rows
//   rules page         title, heading, bullet list, \newpage
//   board 1            title, subtitle, R×C tabular
//   \newpage
//   board 2
//   ...
//   board X            (no \newpage after the last board)
//   \end{document}
//
// All text coming from prompts or the theme goes through
// `escape_latex`, so characters like & % $ # _ { } print
// literally instead of breaking the table.
//
// Compile the result with e.g. `pdflatex bingo_tables.tex`.

use std::fmt::{self, Write};

use crate::domain::board::Grid;
use crate::domain::traits::DocumentRenderer;
use crate::infra::theme::DocumentTheme;

/// Total share of the line width taken by the table columns
const TABLE_WIDTH: f64 = 0.90;

const PREAMBLE: &str = r"\documentclass{article}
\usepackage[a4paper, landscape, margin=1in]{geometry}
\usepackage{array}
\usepackage{nopageno}
\usepackage[T1]{fontenc}
\usepackage[utf8]{inputenc}
\usepackage{helvet}
\renewcommand{\familydefault}{\sfdefault}
\renewcommand{\arraystretch}{1.8}
\setlength{\tabcolsep}{6pt}
\begin{document}
";

pub struct LatexRenderer {
    theme: DocumentTheme,
}

impl LatexRenderer {
    pub fn new(theme: DocumentTheme) -> Self {
        Self { theme }
    }

    /// Stream the whole document into any fmt::Write sink.
    pub fn render_into<W: Write>(&self, boards: &[Grid], out: &mut W) -> fmt::Result {
        out.write_str(PREAMBLE)?;
        writeln!(out)?;

        self.write_rules(out)?;

        for (i, grid) in boards.iter().enumerate() {
            self.write_board(grid, out)?;
            if i + 1 != boards.len() {
                writeln!(out, r"\newpage")?;
                writeln!(out)?;
            }
        }

        writeln!(out, r"\end{{document}}")
    }

    fn write_rules<W: Write>(&self, out: &mut W) -> fmt::Result {
        let t = &self.theme;

        writeln!(out, r"\begin{{center}}")?;
        writeln!(out, r"{{\LARGE\bfseries {}}}\\[2em]", escape_latex(&t.title))?;
        writeln!(out, r"\end{{center}}")?;
        writeln!(out)?;

        writeln!(out, r"{{\large")?;
        writeln!(out, r"\textbf{{{}}}", escape_latex(&t.rules_heading))?;
        // An itemize without items does not compile
        if !t.rules.is_empty() {
            writeln!(out, r"\begin{{itemize}}")?;
            for rule in &t.rules {
                // `{}` ends the macro so a leading '[' is not read as a label
                writeln!(out, r"\item{{}} {}", escape_latex(rule))?;
            }
            writeln!(out, r"\end{{itemize}}")?;
        }
        writeln!(out, "}}")?;
        writeln!(out, r"\newpage")?;
        writeln!(out)
    }

    fn write_board<W: Write>(&self, grid: &Grid, out: &mut W) -> fmt::Result {
        let t = &self.theme;

        writeln!(out, r"\begin{{center}}")?;
        writeln!(out, r"{{\LARGE\bfseries {}}}\\[0.5em]", escape_latex(&t.title))?;
        writeln!(out, r"{{\large {}}}\\[2em]", escape_latex(&t.subtitle))?;
        writeln!(out, r"\begin{{tabular}}{{|{}}}", column_spec(grid.cols()))?;
        writeln!(out, r"\hline")?;

        for row in grid.iter_rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(p) => escape_latex(p.as_str()),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(out, r"{} \\", cells.join(" & "))?;
            writeln!(out, r"\hline")?;
        }

        writeln!(out, r"\end{{tabular}}")?;
        writeln!(out, r"\end{{center}}")
    }
}

impl DocumentRenderer for LatexRenderer {
    fn render(&self, boards: &[Grid]) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render_into(boards, &mut out)?;
        Ok(out)
    }
}

/// `p{W\linewidth}|` repeated once per column
fn column_spec(cols: usize) -> String {
    let width = TABLE_WIDTH / cols as f64;
    format!(r"p{{{width:.2}\linewidth}}|").repeat(cols)
}

/// Neutralise LaTeX special characters so `text` prints as-is.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~'  => out.push_str(r"\textasciitilde{}"),
            '^'  => out.push_str(r"\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::Prompt;

    fn grid_2x2(a: &str, b: &str) -> Grid {
        Grid::from_cells(
            2,
            2,
            vec![Some(Prompt::new(a).unwrap()), None, None, Some(Prompt::new(b).unwrap())],
        )
    }

    fn renderer() -> LatexRenderer {
        LatexRenderer::new(DocumentTheme::default())
    }

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_latex("50% & $5"), r"50\% \& \$5");
        assert_eq!(escape_latex("snake_case #1"), r"snake\_case \#1");
        assert_eq!(escape_latex("{x}"), r"\{x\}");
        assert_eq!(escape_latex(r"C:\dir"), r"C:\textbackslash{}dir");
        assert_eq!(escape_latex("a~b^c"), r"a\textasciitilde{}b\textasciicircum{}c");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_latex("har brugt Emacs i 10 år"), "har brugt Emacs i 10 år");
    }

    #[test]
    fn test_column_spec() {
        assert_eq!(column_spec(5), r"p{0.18\linewidth}|".repeat(5));
        assert_eq!(column_spec(3), r"p{0.30\linewidth}|".repeat(3));
    }

    #[test]
    fn test_structure_and_order() {
        let boards = [grid_2x2("A", "B"), grid_2x2("C", "D"), grid_2x2("E", "F")];
        let doc    = renderer().render(&boards).unwrap();

        assert!(doc.starts_with(r"\documentclass{article}"));
        assert!(doc.trim_end().ends_with(r"\end{document}"));

        // rules page first, then one tabular per board
        let rules = doc.find(r"\begin{itemize}").unwrap();
        let first = doc.find(r"\begin{tabular}").unwrap();
        assert!(rules < first);
        assert_eq!(doc.matches(r"\begin{tabular}").count(), 3);

        // one \newpage after the rules, one between each pair of boards
        assert_eq!(doc.matches(r"\newpage").count(), 3);
        let last_table = doc.rfind(r"\end{tabular}").unwrap();
        assert!(!doc[last_table..].contains(r"\newpage"));

        // boards in order
        let a = doc.find("A &").unwrap();
        let c = doc.find("C &").unwrap();
        let e = doc.find("E &").unwrap();
        assert!(a < c && c < e);
    }

    #[test]
    fn test_rows_and_blank_cells() {
        let doc = renderer().render(&[grid_2x2("A", "B")]).unwrap();
        assert!(doc.contains("A &   \\\\\n\\hline\n"));
        assert!(doc.contains("  & B \\\\\n\\hline\n"));
        assert_eq!(doc.matches(r"\hline").count(), 3);
    }

    #[test]
    fn test_prompt_text_escaped_in_cells() {
        let doc = renderer().render(&[grid_2x2("R&D", "100%")]).unwrap();
        assert!(doc.contains(r"R\&D"));
        assert!(doc.contains(r"100\%"));
    }

    #[test]
    fn test_empty_rules_skip_itemize() {
        let theme = DocumentTheme { rules: Vec::new(), ..DocumentTheme::default() };
        let doc   = LatexRenderer::new(theme).render(&[grid_2x2("A", "B")]).unwrap();
        assert!(!doc.contains(r"\begin{itemize}"));
        assert!(doc.contains(r"\textbf{Regler:}"));
    }

    #[test]
    fn test_rule_starting_with_bracket_is_text() {
        let theme = DocumentTheme { rules: vec!["[x] tick".to_string()], ..DocumentTheme::default() };
        let doc   = LatexRenderer::new(theme).render(&[]).unwrap();
        assert!(doc.contains("\\item{} [x] tick\n"));
        assert!(!doc.contains(r"\item ["));
    }

    #[test]
    fn test_render_matches_streamed_output() {
        let boards  = [grid_2x2("A", "B")];
        let mut out = String::new();
        renderer().render_into(&boards, &mut out).unwrap();
        assert_eq!(renderer().render(&boards).unwrap(), out);
    }

    #[test]
    fn test_no_boards_still_has_rules() {
        let doc = renderer().render(&[]).unwrap();
        assert!(doc.contains(r"\begin{itemize}"));
        assert!(!doc.contains(r"\begin{tabular}"));
    }
}
