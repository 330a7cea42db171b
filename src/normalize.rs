use crate::lexicon::{Lexicon, Locale};

/// Expand contractions, turn small number words into digits and collapse
/// whitespace. With `remove_articles`, "a", "an" and "the" are dropped.
pub(crate) fn normalize(text: &str, remove_articles: bool, locale: Locale) -> String {
    let lexicon = Lexicon::for_locale(locale);
    let mut out: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if let Some(expanded) = lexicon.contraction(word) {
            out.push(expanded.to_string());
        } else if let Some(n) = lexicon.small_number(word) {
            out.push(n.to_string());
        } else if remove_articles && lexicon.is_article(word) {
            continue;
        } else {
            out.push(word.to_string());
        }
    }
    out.join(" ")
}
