//! Identifier quoting for SQL text.
//!
//! Table and column names cannot be bound as statement parameters, so every
//! identifier that ends up inside a query string goes through [`sanitize`].
//! Data values never do: they are always bound.
use regex::Regex;
use std::sync::LazyLock;

/// Identifiers matching this pattern can be written bare.
static BARE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Hardcode regex pattern"));

/// Reserved words of the store's grammar, which must be quoted even when
/// they look like plain identifiers.
const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC", "BOTH",
    "CASE", "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "DEFAULT",
    "DEFERRABLE", "DESC", "DESCRIBE", "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE",
    "FETCH", "FOR", "FOREIGN", "FROM", "GRANT", "GROUP", "HAVING", "IN", "INITIALLY",
    "INTERSECT", "INTO", "LAMBDA", "LATERAL", "LEADING", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "ONLY",
    "OR", "ORDER", "PIVOT", "PIVOT_LONGER", "PIVOT_WIDER", "PLACING", "PRIMARY", "QUALIFY",
    "REFERENCES", "RETURNING", "SELECT", "SHOW", "SOME", "SUMMARIZE", "SYMMETRIC", "TABLE",
    "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE", "UNPIVOT", "USING", "VARIADIC",
    "WHEN", "WHERE", "WINDOW", "WITH",
];

/// Keywords allowed as type or function names only, never as a bare table
/// or column name.
const TYPE_FUNC_NAME_KEYWORDS: &[&str] = &[
    "ANTI", "ASOF", "AT", "AUTHORIZATION", "BINARY", "BY", "COLLATION", "CONCURRENTLY", "CROSS", "FREEZE",
    "FULL", "GENERATED", "GLOB", "ILIKE", "INNER", "IS", "ISNULL", "JOIN", "LEFT", "LIKE", "MAP",
    "NATURAL", "NOTNULL", "OUTER", "OVERLAPS", "POSITIONAL", "RIGHT", "SEMI", "SIMILAR",
    "STRUCT", "TABLESAMPLE", "TRY_CAST", "UNPACK", "VERBOSE",
];

/// Quoting delimiter for identifiers.
const QUOTE: char = '"';

/// Returns `identifier` unchanged when it can appear bare in query text,
/// otherwise wraps it in double quotes with embedded quotes doubled.
///
/// Applying it to an already-safe identifier is a no-op. Applying it twice to
/// an identifier that needed quoting is not: the quotes themselves get escaped.
pub fn sanitize(identifier: &str) -> String {
    if is_bare(identifier) {
        identifier.to_owned()
    } else {
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(QUOTE);
        for c in identifier.chars() {
            if c == QUOTE {
                quoted.push(QUOTE);
            }
            quoted.push(c);
        }
        quoted.push(QUOTE);
        quoted
    }
}

/// Sanitizes each identifier and joins them with `", "`.
pub(crate) fn sanitize_list<S: AsRef<str>>(identifiers: &[S]) -> String {
    identifiers
        .iter()
        .map(|identifier| sanitize(identifier.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_bare(identifier: &str) -> bool {
    if !BARE_IDENTIFIER.is_match(identifier) {
        return false;
    }
    let word = identifier.to_ascii_uppercase();
    !RESERVED_KEYWORDS.contains(&word.as_str()) && !TYPE_FUNC_NAME_KEYWORDS.contains(&word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifier_is_unchanged() {
        assert_eq!(sanitize("Subjects"), "Subjects");
        assert_eq!(sanitize("faculty_id"), "faculty_id");
        assert_eq!(sanitize("_Name2"), "_Name2");
    }

    #[test]
    fn safe_identifier_is_fixed_point() {
        for identifier in ["Subjects", "Name_duplicate", "x1"] {
            assert_eq!(sanitize(&sanitize(identifier)), sanitize(identifier));
        }
    }

    #[test]
    fn identifier_with_space_is_quoted() {
        for identifier in ["Subject Code", " leading", "trailing ", "a\tb"] {
            let quoted = sanitize(identifier);
            assert!(quoted.starts_with('"') && quoted.ends_with('"'));
            assert_eq!(&quoted[1..quoted.len() - 1], identifier);
        }
    }

    #[test]
    fn embedded_quote_is_doubled() {
        assert_eq!(sanitize(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(sanitize(r#"x"); DROP TABLE t; --"#), r#""x""); DROP TABLE t; --""#);
    }

    #[test]
    fn reserved_keyword_is_quoted() {
        assert_eq!(sanitize("order"), r#""order""#);
        assert_eq!(sanitize("Select"), r#""Select""#);
    }

    #[test]
    fn type_or_function_keyword_is_quoted() {
        for identifier in ["Left", "RIGHT", "join", "Like", "Is", "Natural", "Binary", "Asof", "Semi"] {
            assert_eq!(sanitize(identifier), format!("\"{identifier}\""));
        }
        assert_eq!(sanitize("Between"), "Between");
        assert_eq!(sanitize("Values"), "Values");
    }

    #[test]
    fn every_store_keyword_that_cannot_be_bare_is_quoted() {
        let database = crate::Database::open_in_memory().unwrap();
        let mut statement = database
            .connection()
            .prepare("SELECT keyword_name FROM duckdb_keywords() WHERE keyword_category IN ('reserved', 'type_function')")
            .unwrap();
        let keywords = statement
            .query_map([], |row| row.get::<_, String>(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert!(!keywords.is_empty());
        for keyword in keywords {
            assert_eq!(sanitize(&keyword), format!("\"{keyword}\""), "{keyword} must be quoted");
        }
        for identifier in ["Lambda", "At", "By", "Unpack"] {
            assert_eq!(sanitize(identifier), format!("\"{identifier}\""));
        }
    }

    #[test]
    fn punctuation_and_non_ascii_are_quoted() {
        assert_eq!(sanitize("Faculty-ID"), r#""Faculty-ID""#);
        assert_eq!(sanitize("1st"), r#""1st""#);
        assert_eq!(sanitize("Größe"), r#""Größe""#);
        assert_eq!(sanitize(""), r#""""#);
    }

    #[test]
    fn sanitize_list_joins_with_commas() {
        assert_eq!(sanitize_list(&["Name", "Subject Code"]), r#"Name, "Subject Code""#);
    }
}
