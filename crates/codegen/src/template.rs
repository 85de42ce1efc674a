//! # Stub Rendering
//!
//! Literal `{{token}}` replacement. Every token is resolved in one left to
//! right pass over the stub, so text inserted for one token is never
//! scanned again. Tokens with no value are copied through unchanged.

use std::collections::HashMap;

/// Token names understood by the pivot stubs.
pub mod tokens {
    pub const CLASS: &str = "class";
    pub const PIVOT_TABLE_NAME: &str = "pivotTableName";
    pub const COLUMN_ONE: &str = "columnOne";
    pub const COLUMN_TWO: &str = "columnTwo";
    pub const TABLE_ONE: &str = "tableOne";
    pub const TABLE_TWO: &str = "tableTwo";
    pub const FOREIGN_KEYS: &str = "foreignKeys";

    /// Every token, in the order they are documented
    pub const ALL: &[&str] = &[
        CLASS,
        PIVOT_TABLE_NAME,
        COLUMN_ONE,
        COLUMN_TWO,
        TABLE_ONE,
        TABLE_TWO,
        FOREIGN_KEYS,
    ];
}

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Token name → replacement value
pub type TokenValues = HashMap<&'static str, String>;

/// Substitute every known `{{token}}` in `stub`.
pub fn render(stub: &str, values: &TokenValues) -> String {
    let mut out = String::with_capacity(stub.len() + 256);
    let mut rest = stub;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        let replaced = after.find(CLOSE).and_then(|end| {
            values
                .get(&after[..end])
                .map(|value| (value, &after[end + CLOSE.len()..]))
        });

        match replaced {
            Some((value, remainder)) => {
                out.push_str(value);
                rest = remainder;
            }
            None => {
                // not a known token: emit one brace so a token starting at the
                // next brace (`{{{class}}}`) is still found
                out.push('{');
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> TokenValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let out = render(
            "{{columnOne}} and {{columnOne}} again",
            &values(&[(tokens::COLUMN_ONE, "role_id")]),
        );
        assert_eq!(out, "role_id and role_id again");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let out = render("{{class}} {{mystery}}", &values(&[(tokens::CLASS, "Foo")]));
        assert_eq!(out, "Foo {{mystery}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = render(
            "{{class}}|{{pivotTableName}}",
            &values(&[
                (tokens::CLASS, "{{pivotTableName}}"),
                (tokens::PIVOT_TABLE_NAME, "role_user"),
            ]),
        );
        assert_eq!(out, "{{pivotTableName}}|role_user");
    }

    #[test]
    fn test_empty_value_removes_token() {
        let out = render("a{{foreignKeys}}b", &values(&[(tokens::FOREIGN_KEYS, "")]));
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_unbalanced_braces() {
        let v = values(&[(tokens::CLASS, "Foo")]);
        assert_eq!(render("{{ {{class}}", &v), "{{ Foo");
        assert_eq!(render("tail {{class", &v), "tail {{class");
        assert_eq!(render("no tokens here", &v), "no tokens here");
    }

    #[test]
    fn test_extra_braces_around_token() {
        let v = values(&[(tokens::CLASS, "Foo")]);
        assert_eq!(render("{{{class}}}", &v), "{Foo}");
        assert_eq!(render("{{{class}}} x {{{{class}}}}", &v), "{Foo} x {{Foo}}");
        assert_eq!(render("{{{mystery}}}", &v), "{{{mystery}}}");
    }
}
