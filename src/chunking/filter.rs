//! Directive filtering.
//!
//! Before a literate source is chunked, every line tagged for another output
//! target is removed and the tag of lines meant for this target is stripped:
//!
//! - `#md` lines only appear in markdown output,
//! - `#nb` lines only appear in notebooks,
//! - `#jl` lines (prefix or ` #jl` suffix) only appear in scripts.
//!
//! Filtering also normalizes `\r\n` line endings and substitutes the
//! `@__NAME__` placeholder.

use crate::core::Target;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder replaced by the document name.
pub const NAME_PLACEHOLDER: &str = "@__NAME__";

/// Line-anchored patterns used by the filter.
#[derive(Debug, Clone, Copy)]
enum Directive {
    /// A whole `#md` or `#nb` line.
    MarkdownOrNotebookLine,
    /// A whole `#md` line.
    MarkdownLine,
    /// A whole `#nb` line.
    NotebookLine,
    /// A whole `#jl` line.
    ScriptLine,
    /// A whole line ending in `#jl`.
    ScriptSuffixLine,
    /// The `#md ` prefix.
    MarkdownPrefix,
    /// The `#nb ` prefix.
    NotebookPrefix,
    /// The `#jl ` prefix.
    ScriptPrefix,
    /// The ` #jl` suffix.
    ScriptSuffix,
    /// A fenced `math` block.
    MathFence,
}

impl Directive {
    /// Returns the compiled regex for this directive.
    #[allow(clippy::expect_used)]
    fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::MarkdownOrNotebookLine => static_regex!(MD_OR_NB_LINE, r"(?m)^#(md|nb).*\n?"),
            Self::MarkdownLine => static_regex!(MD_LINE, r"(?m)^#md.*\n?"),
            Self::NotebookLine => static_regex!(NB_LINE, r"(?m)^#nb.*\n?"),
            Self::ScriptLine => static_regex!(JL_LINE, r"(?m)^#jl.*\n?"),
            Self::ScriptSuffixLine => static_regex!(JL_SUFFIX_LINE, r"(?m)^.*#jl$\n?"),
            Self::MarkdownPrefix => static_regex!(MD_PREFIX, r"(?m)^#md "),
            Self::NotebookPrefix => static_regex!(NB_PREFIX, r"(?m)^#nb "),
            Self::ScriptPrefix => static_regex!(JL_PREFIX, r"(?m)^#jl "),
            Self::ScriptSuffix => static_regex!(JL_SUFFIX, r"(?m) #jl$"),
            Self::MathFence => static_regex!(MATH_FENCE, r"(?s)```math(.*?)```"),
        }
    }

    /// Removes every match.
    fn strip(self, content: &str) -> String {
        self.replace(content, "")
    }

    fn replace(self, content: &str, replacement: &str) -> String {
        self.regex().replace_all(content, replacement).into_owned()
    }
}

/// The directive rules applied for a target, in order.
const fn rules(target: Target) -> &'static [Directive] {
    match target {
        Target::Script => &[
            Directive::MarkdownOrNotebookLine,
            Directive::ScriptPrefix,
            Directive::ScriptSuffix,
        ],
        Target::Markdown => &[
            Directive::NotebookLine,
            Directive::ScriptLine,
            Directive::ScriptSuffixLine,
            Directive::MarkdownPrefix,
        ],
        Target::Notebook => &[
            Directive::MarkdownLine,
            Directive::ScriptLine,
            Directive::ScriptSuffixLine,
            Directive::NotebookPrefix,
        ],
    }
}

/// Applies the directive rules of `target` to `content`.
///
/// Each rule runs once, so a line carrying two directive prefixes loses only
/// the first one: `#md #md x` becomes `#md x` for markdown. Filtering output
/// that has no stacked prefixes again leaves it unchanged.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::filter;
/// use literate_rs::core::Target;
///
/// let src = "#md # Title\n#nb # Notebook title\nx = 1 #jl\n";
/// assert_eq!(filter(src, Target::Markdown, "demo"), "# Title\n");
/// assert_eq!(filter(src, Target::Script, "demo"), "x = 1\n");
/// ```
#[must_use]
pub fn filter(content: &str, target: Target, name: &str) -> String {
    let mut content = content.replace("\r\n", "\n");

    for rule in rules(target) {
        content = rule.strip(&content);
    }

    if target == Target::Notebook {
        content = Directive::MathFence.replace(&content, r"\begin{equation}${1}\end{equation}");
    }

    content.replace(NAME_PLACEHOLDER, name)
}
