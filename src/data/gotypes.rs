//! Type token to Go type mappings
//!
//! The basic tokens (`num`, `str`, `bool`, `array`, `obj`) are always
//! understood. The extended family (`list`, `array(num)`, ...) is only
//! consulted when extended types are enabled; otherwise those tokens pass
//! through verbatim like any other unknown token.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Element type of an extended array token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayElement {
    /// Slice of a nested struct named after the (singular) field
    Named,
    /// Slice of a Go scalar
    Scalar(&'static str),
}

lazy_static! {
    /// Extended array spellings and their element type
    pub static ref EXTENDED_ARRAY_TYPES: HashMap<&'static str, ArrayElement> = {
        let mut m = HashMap::new();

        for base in ["array", "Array", "list", "List"] {
            m.insert(base, ArrayElement::Named);
        }

        m.insert("array(obj)", ArrayElement::Named);
        m.insert("Array(obj)", ArrayElement::Named);
        m.insert("list(obj)", ArrayElement::Named);
        m.insert("List(obj)", ArrayElement::Named);

        m.insert("array(num)", ArrayElement::Scalar("int"));
        m.insert("Array(num)", ArrayElement::Scalar("int"));
        m.insert("list(num)", ArrayElement::Scalar("int"));
        m.insert("List(num)", ArrayElement::Scalar("int"));

        m.insert("array(str)", ArrayElement::Scalar("string"));
        m.insert("Array(str)", ArrayElement::Scalar("string"));
        m.insert("list(str)", ArrayElement::Scalar("string"));
        m.insert("List(str)", ArrayElement::Scalar("string"));

        m.insert("array(bool)", ArrayElement::Scalar("bool"));
        m.insert("Array(bool)", ArrayElement::Scalar("bool"));
        m.insert("list(bool)", ArrayElement::Scalar("bool"));
        m.insert("List(bool)", ArrayElement::Scalar("bool"));

        m
    };
}

/// Whether `token` is one of the recognised type tokens
pub fn is_known_type(token: &str, extended: bool) -> bool {
    matches!(token, "num" | "str" | "bool" | "array" | "obj")
        || (extended && EXTENDED_ARRAY_TYPES.contains_key(token))
}

/// Resolve a type token into a Go type.
///
/// `declared_name` is the already converted field name, used for nested
/// struct types. Unknown tokens, including the empty string, are returned
/// unchanged.
pub fn resolve_go_type(token: &str, declared_name: &str, extended: bool) -> String {
    match token {
        "num" => return "int".to_string(),
        "str" => return "string".to_string(),
        "obj" => return declared_name.to_string(),
        "array" if !extended => return format!("[]{}", declared_name),
        _ => {}
    }

    if extended {
        match EXTENDED_ARRAY_TYPES.get(token) {
            Some(ArrayElement::Named) => return format!("[]{}", singularize(declared_name)),
            Some(ArrayElement::Scalar(scalar)) => return format!("[]{}", scalar),
            None => {}
        }
    }

    token.to_string()
}

/// Drop a single trailing `s` (`Items` -> `Item`)
fn singularize(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        assert_eq!(resolve_go_type("num", "Id", false), "int");
        assert_eq!(resolve_go_type("str", "Id", false), "string");
        assert_eq!(resolve_go_type("bool", "IsDeleted", false), "bool");
        assert_eq!(resolve_go_type("array", "Items", false), "[]Items");
        assert_eq!(resolve_go_type("obj", "Owner", false), "Owner");
    }

    #[test]
    fn test_unknown_passthrough() {
        assert_eq!(resolve_go_type("float64", "Score", false), "float64");
        assert_eq!(resolve_go_type("", "Score", false), "");
        // Extended spellings are not special without the flag
        assert_eq!(resolve_go_type("list", "Tags", false), "list");
        assert_eq!(resolve_go_type("array(num)", "Ids", false), "array(num)");
    }

    #[test]
    fn test_extended_named_arrays_singularize() {
        assert_eq!(resolve_go_type("array", "Items", true), "[]Item");
        assert_eq!(resolve_go_type("List", "Children", true), "[]Children");
        assert_eq!(resolve_go_type("list(obj)", "Users", true), "[]User");
    }

    #[test]
    fn test_extended_scalar_arrays() {
        assert_eq!(resolve_go_type("array(num)", "Ids", true), "[]int");
        assert_eq!(resolve_go_type("List(str)", "Tags", true), "[]string");
        assert_eq!(resolve_go_type("Array(bool)", "Flags", true), "[]bool");
    }

    #[test]
    fn test_known_types() {
        assert!(is_known_type("obj", false));
        assert!(!is_known_type("list", false));
        assert!(is_known_type("list", true));
        assert!(!is_known_type("", true));
    }
}
