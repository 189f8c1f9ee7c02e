//! Two-stage decoding of item-set fields from the mined-rules dataset.
//!
//! Mined-rules exports encode each item-set either as a structured set
//! literal (`frozenset({'MILK', 'BREAD'})`, `{'MILK'}`, `['MILK']`) or as a
//! `|`-delimited string (`MILK|BREAD`). The literal form is decoded by a
//! strict bracket/quote-aware tokenizer, never by evaluating the text as
//! code; then the delimited form is tried; then the field resolves to an
//! empty set. An empty set is not an error: the row simply cannot match any
//! basket and is dropped by the store.

use std::collections::BTreeSet;

use super::normalize_item;

/// Decode an item-set field: structured literal first, `|`-delimited
/// fallback, empty set if both fail. Tokens are normalized (trim +
/// uppercase); tokens that normalize to empty are discarded.
#[must_use]
pub fn parse_item_set(structured: Option<&str>, delimited: Option<&str>) -> BTreeSet<String> {
    if let Some(text) = structured {
        if let Some(tokens) = parse_set_literal(text) {
            return tokens
                .iter()
                .map(|token| normalize_item(token))
                .filter(|token| !token.is_empty())
                .collect();
        }
    }
    if let Some(text) = delimited {
        return text
            .split('|')
            .map(normalize_item)
            .filter(|token| !token.is_empty())
            .collect();
    }
    BTreeSet::new()
}

/// Strict set-literal tokenizer.
///
/// Accepts an optional `frozenset( ... )` wrapper around a `{...}`, `[...]`
/// or `(...)` body of comma-separated quoted strings (single or double
/// quotes, backslash escapes, trailing comma tolerated). Anything else is a
/// parse failure (`None`), triggering the delimited fallback. A parse that
/// succeeds with zero elements is a success, not a fallback trigger.
fn parse_set_literal(text: &str) -> Option<Vec<String>> {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix("frozenset") {
        let rest = rest.trim_start().strip_prefix('(')?;
        body = rest.trim_end().strip_suffix(')')?.trim();
        // frozenset() with no inner collection is the empty set
        if body.is_empty() {
            return Some(Vec::new());
        }
    }

    let close = match body.chars().next()? {
        '{' => '}',
        '[' => ']',
        '(' => ')',
        _ => return None,
    };
    let mut chars = body.chars();
    chars.next();
    let inner = chars.as_str().strip_suffix(close)?;

    parse_elements(inner)
}

/// Parse the comma-separated quoted elements inside a literal body.
fn parse_elements(inner: &str) -> Option<Vec<String>> {
    let mut elements = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        let Some(&quote) = chars.peek() else {
            break;
        };
        if quote != '\'' && quote != '"' {
            return None;
        }
        chars.next();

        let mut element = String::new();
        loop {
            match chars.next()? {
                '\\' => element.push(chars.next()?),
                c if c == quote => break,
                c => element.push(c),
            }
        }
        elements.push(element);

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(_) => return None,
        }
    }

    Some(elements)
}
