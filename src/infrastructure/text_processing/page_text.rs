use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

pub fn normalize_page_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");
    collapse_whitespace(&de_hyphenated)
}

pub fn join_runs<'a>(runs: impl IntoIterator<Item = &'a str>) -> String {
    let mut page = String::new();
    for run in runs {
        let normalized: String = run.nfkc().collect();
        let run = collapse_whitespace(&normalized);
        if run.is_empty() {
            continue;
        }
        if !page.is_empty() {
            page.push(' ');
        }
        page.push_str(&run);
    }
    page
}

pub fn join_pages(pages: impl IntoIterator<Item = String>) -> String {
    pages
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
