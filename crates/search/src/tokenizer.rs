//! Query tokenizer
//!
//! Splits a free-text query into search terms. Whitespace separates bare
//! words; double quotes group a phrase into a single term.

const QUOTE: char = '"';

/// Parse a query into search terms
///
/// Rules:
/// - Outside quotes, runs of non-whitespace are terms. A `"` also ends the
///   current word.
/// - A `"` opens a phrase that runs to the next `"`. An unterminated phrase
///   runs to the end of the query.
/// - A phrase keeps its interior verbatim (no trimming, no collapsing).
///   An empty phrase (`""`) yields no term.
/// - Terms keep their order of appearance and their original case.
///
/// # Example
///
/// ```
/// use molten_search::tokenizer::parse_search_terms;
///
/// let terms = parse_search_terms("\"chocolate crayon\" red");
/// assert_eq!(terms, vec!["chocolate crayon", "red"]);
/// ```
pub fn parse_search_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut in_phrase = false;

    for ch in query.trim().chars() {
        if in_phrase {
            if ch == QUOTE {
                in_phrase = false;
                push_term(&mut terms, &mut current);
            } else {
                current.push(ch);
            }
        } else if ch == QUOTE {
            push_term(&mut terms, &mut current);
            in_phrase = true;
        } else if ch.is_whitespace() {
            push_term(&mut terms, &mut current);
        } else {
            current.push(ch);
        }
    }
    push_term(&mut terms, &mut current);

    terms
}

fn push_term(terms: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        terms.push(std::mem::take(current));
    }
}
