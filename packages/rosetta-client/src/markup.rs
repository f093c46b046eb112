//! Queries over markup-embedded sub-fields.
//!
//! Several Rosetta fields pack independent properties as sibling tags
//! inside one rich-text blob (opening hours, accessibility, fees and
//! comments inside a place description; address parts inside a
//! contact "ephemera" fragment). These helpers answer exactly one
//! question: find the first element matching a selector and return
//! its text. Nothing here renders HTML.

use scraper::{Html, Selector};

/// Text of the first element matching `selector` inside `markup`.
/// `None` when the selector does not match or the match is empty.
pub fn select_text(markup: &str, selector: &str) -> Option<String> {
    let fragment = Html::parse_fragment(markup);
    let selector = Selector::parse(selector).ok()?;
    let text = fragment
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    (!text.is_empty()).then_some(text)
}

/// Texts of every element matching `inner` under the first element
/// matching `outer`. Empty when either selector misses.
pub fn select_texts(markup: &str, outer: &str, inner: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(markup);
    let (Ok(outer), Ok(inner)) = (Selector::parse(outer), Selector::parse(inner)) else {
        return vec![];
    };
    let Some(root) = fragment.select(&outer).next() else {
        return vec![];
    };
    root.select(&inner)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// The scope-and-content body of a catalogue description: the text of
/// the `span.scopecontent` wrapper, when present.
pub fn scope_and_content(markup: &str) -> Option<String> {
    select_text(markup, "span.scopecontent")
}

/// Join the `span.emph` children of a `span.wrapper` blob with
/// `<br>`, the line-break convention the predecessor API emitted.
pub fn wrapper_spans(markup: &str) -> Option<String> {
    let contents = select_texts(markup, "span.wrapper", "span.emph");
    (!contents.is_empty()).then(|| contents.join("<br>"))
}

/// Accession years listed inside an accruals date blob.
pub fn accession_years(markup: &str) -> Vec<String> {
    select_texts(markup, "span.accessionyears", "span.accessionyear")
}

/// Text segments of the first element matching `selector`, trimmed
/// and joined with `sep`. Multi-line address blocks use `<br>`
/// separators upstream; joining with `", "` flattens them.
pub fn joined_text(markup: &str, selector: &str, sep: &str) -> Option<String> {
    let fragment = Html::parse_fragment(markup);
    let selector = Selector::parse(selector).ok()?;
    let segments: Vec<String> = fragment
        .select(&selector)
        .next()?
        .text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    (!segments.is_empty()).then(|| segments.join(sep))
}

/// First non-empty text among candidate tag names. Used for agent
/// "ephemera" fragments, which bury the useful value under one of a
/// few possible tags (`foa`, `function`, `address`).
pub fn first_tag_text(markup: &str, tags: &[&str]) -> Option<String> {
    tags.iter().find_map(|tag| select_text(markup, tag))
}
