//! Structural comparison of XML documents
//!
//! Both documents are parsed and lowered into a canonical JSON tree, then the
//! trees are compared. The canonical form ignores:
//!
//! - attribute order within an element
//! - order between sibling elements with different names
//! - whitespace around text and between tags
//! - comments and processing instructions
//!
//! Order among same-named siblings is kept (policy steps such as successive
//! `<set-header>` elements run in document order).
//!
//! # Canonical form
//!
//! - Attributes become `-name` keys.
//! - Child elements are keyed by name; repeated names collect into an array.
//! - Text segments are trimmed and whitespace-only segments dropped. Segments
//!   split by a comment or processing instruction stay separate.
//! - An element with a single text segment and nothing else lowers to that
//!   string; an empty element lowers to `""`. Several segments are kept as a
//!   list under `#text`.
//! - Mixed content (text next to child elements) keeps document order: it is
//!   lowered to an ordered `#content` list of strings and `{name: child}`
//!   entries, so moving text across a child is a change.
//! - Namespaced names use `{uri}local` notation, so prefix choice is irrelevant.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};
use serde_json::Value;

use crate::error::{Error, Result};

/// Maximum element nesting lowered before giving up
const MAX_DEPTH: usize = 256;

const TEXT_KEY: &str = "#text";
const CONTENT_KEY: &str = "#content";
const ATTRIBUTE_PREFIX: char = '-';

/// Outcome of a structural comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralVerdict {
    /// Both documents parsed and their canonical trees match
    Equivalent,
    /// Both documents parsed and their canonical trees differ
    Different,
    /// At least one document is not well-formed XML
    Undetermined,
}

impl StructuralVerdict {
    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::Undetermined)
    }

    /// The verdict as a boolean, if one was reached
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Equivalent => Some(true),
            Self::Different => Some(false),
            Self::Undetermined => None,
        }
    }
}

/// Parse a document and lower it into its canonical tree.
///
/// # Errors
///
/// Returns `Xml` if the source is not well-formed XML, or `TooDeep` if
/// elements nest beyond the supported depth.
///
/// # Examples
///
/// ```
/// use policy_content::structural::canonicalize;
///
/// let a = canonicalize(r#"<a b="1" c="2"/>"#).unwrap();
/// let b = canonicalize(r#"<a c="2" b="1"/>"#).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn canonicalize(source: &str) -> Result<Value> {
    let document = Document::parse(source)?;
    let root = document.root_element();

    let mut tree = BTreeMap::new();
    tree.insert(element_name(root), lower_element(root, 0)?);
    Ok(Value::Object(tree.into_iter().collect()))
}

/// Compare two documents structurally.
///
/// A parse failure on either side is not an error: it yields
/// [`StructuralVerdict::Undetermined`] so the caller can fall back.
pub fn compare(old: &str, new: &str) -> StructuralVerdict {
    let old_tree = match canonicalize(old) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::debug!(side = "old", error = %e, "Structural parse failed");
            return StructuralVerdict::Undetermined;
        }
    };
    let new_tree = match canonicalize(new) {
        Ok(tree) => tree,
        Err(e) => {
            tracing::debug!(side = "new", error = %e, "Structural parse failed");
            return StructuralVerdict::Undetermined;
        }
    };

    if old_tree == new_tree {
        StructuralVerdict::Equivalent
    } else {
        StructuralVerdict::Different
    }
}

/// A content item of an element, in document order
enum Piece {
    Text(String),
    Element(String, Value),
}

fn lower_element(node: Node<'_, '_>, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep { depth: MAX_DEPTH });
    }

    let mut fields: BTreeMap<String, Value> = BTreeMap::new();
    for attribute in node.attributes() {
        let key = format!(
            "{ATTRIBUTE_PREFIX}{}",
            expanded_name(attribute.namespace(), attribute.name())
        );
        fields.insert(key, Value::String(attribute.value().to_string()));
    }

    let mut pieces = Vec::new();
    for child in node.children() {
        if child.is_element() {
            let value = lower_element(child, depth + 1)?;
            pieces.push(Piece::Element(element_name(child), value));
        } else if child.is_text() {
            let segment = child.text().map(str::trim).unwrap_or_default();
            if !segment.is_empty() {
                pieces.push(Piece::Text(segment.to_string()));
            }
        }
    }

    let has_text = pieces.iter().any(|p| matches!(p, Piece::Text(_)));
    let has_elements = pieces.iter().any(|p| matches!(p, Piece::Element(..)));

    if has_text && has_elements {
        let content = pieces
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(text) => Value::String(text),
                Piece::Element(name, value) => {
                    let mut entry = serde_json::Map::new();
                    entry.insert(name, value);
                    Value::Object(entry)
                }
            })
            .collect();
        fields.insert(CONTENT_KEY.to_string(), Value::Array(content));
        return Ok(Value::Object(fields.into_iter().collect()));
    }

    if has_elements {
        for piece in pieces {
            if let Piece::Element(name, value) = piece {
                push_child(&mut fields, name, value);
            }
        }
        return Ok(Value::Object(fields.into_iter().collect()));
    }

    let mut texts: Vec<Value> = pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Text(text) => Some(Value::String(text)),
            Piece::Element(..) => None,
        })
        .collect();

    // A lone element value is never an array, so `push_child` can tell
    // repeated siblings apart from a multi-segment text list.
    match texts.len() {
        0 if fields.is_empty() => return Ok(Value::String(String::new())),
        0 => {}
        1 if fields.is_empty() => return Ok(texts.remove(0)),
        1 => {
            fields.insert(TEXT_KEY.to_string(), texts.remove(0));
        }
        _ => {
            fields.insert(TEXT_KEY.to_string(), Value::Array(texts));
        }
    }
    Ok(Value::Object(fields.into_iter().collect()))
}

/// Add a child under its name, turning repeated names into an array
fn push_child(fields: &mut BTreeMap<String, Value>, name: String, value: Value) {
    match fields.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

fn element_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    expanded_name(tag.namespace(), tag.name())
}

fn expanded_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(uri) => format!("{{{uri}}}{local}"),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonicalize_attributes_and_text() {
        let tree = canonicalize(r#"<set-header name="X-Env"><value> prod </value></set-header>"#)
            .unwrap();
        assert_eq!(
            tree,
            json!({"set-header": {"-name": "X-Env", "value": "prod"}})
        );
    }

    #[test]
    fn test_canonicalize_empty_element_is_empty_string() {
        assert_eq!(canonicalize("<base />").unwrap(), json!({"base": ""}));
    }

    #[test]
    fn test_canonicalize_repeated_children_become_array() {
        let tree = canonicalize("<a><b>1</b><c/><b>2</b><b>3</b></a>").unwrap();
        assert_eq!(tree, json!({"a": {"b": ["1", "2", "3"], "c": ""}}));
    }

    #[test]
    fn test_canonicalize_mixed_content_keeps_order() {
        let tree = canonicalize("<a>\n  hello <b/> world\n</a>").unwrap();
        assert_eq!(tree, json!({"a": {"#content": ["hello", {"b": ""}, "world"]}}));
    }

    #[test]
    fn test_canonicalize_mixed_content_with_attributes() {
        let tree = canonicalize(r#"<a k="1">x<b>y</b></a>"#).unwrap();
        assert_eq!(tree, json!({"a": {"-k": "1", "#content": ["x", {"b": "y"}]}}));
    }

    #[test]
    fn test_canonicalize_text_split_by_comment_stays_split() {
        let tree = canonicalize("<a>foo <!--x--> bar</a>").unwrap();
        assert_eq!(tree, json!({"a": {"#text": ["foo", "bar"]}}));
    }

    #[test]
    fn test_canonicalize_split_text_siblings_stay_distinct() {
        let tree = canonicalize("<p><s>a<!--x-->b</s><s>c</s></p>").unwrap();
        assert_eq!(tree, json!({"p": {"s": [{"#text": ["a", "b"]}, "c"]}}));
    }

    #[test]
    fn test_compare_text_moved_across_child() {
        assert_eq!(
            compare("<set-body>ab<base/>c</set-body>", "<set-body>a<base/>bc</set-body>"),
            StructuralVerdict::Different
        );
        assert_eq!(
            compare("<set-body>hello<b/></set-body>", "<set-body><b/>hello</set-body>"),
            StructuralVerdict::Different
        );
    }

    #[test]
    fn test_compare_text_split_by_comment_differs_from_joined() {
        assert_eq!(
            compare("<a>foo <!--x--> bar</a>", "<a>foobar</a>"),
            StructuralVerdict::Different
        );
    }

    #[test]
    fn test_compare_mixed_content_whitespace_is_ignored() {
        assert_eq!(
            compare("<a>hello<b/>world</a>", "<a>\n  hello\n  <b/>\n  world\n</a>"),
            StructuralVerdict::Equivalent
        );
    }

    #[test]
    fn test_canonicalize_ignores_comments() {
        let with = canonicalize("<a><!-- note --><b/></a>").unwrap();
        let without = canonicalize("<a><b/></a>").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_canonicalize_cdata_matches_escaped_text() {
        let cdata = canonicalize("<a><![CDATA[x < y]]></a>").unwrap();
        let escaped = canonicalize("<a>x &lt; y</a>").unwrap();
        assert_eq!(cdata, escaped);
    }

    #[test]
    fn test_canonicalize_namespace_prefix_is_irrelevant() {
        let a = canonicalize(r#"<p:a xmlns:p="urn:x" p:k="1"/>"#).unwrap();
        let b = canonicalize(r#"<q:a xmlns:q="urn:x" q:k="1"/>"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, json!({"{urn:x}a": {"-{urn:x}k": "1"}}));
    }

    #[test]
    fn test_canonicalize_rejects_template_syntax() {
        let err = canonicalize("<set-body>@(context.Request.Body.As<JObject>())</set-body>")
            .unwrap_err();
        assert!(matches!(err, Error::Xml(_)));
    }

    #[test]
    fn test_canonicalize_rejects_empty() {
        assert!(canonicalize("").is_err());
    }

    #[test]
    fn test_compare_attribute_order() {
        assert_eq!(
            compare(r#"<a b="1" c="2"/>"#, r#"<a c="2" b="1"/>"#),
            StructuralVerdict::Equivalent
        );
    }

    #[test]
    fn test_compare_distinct_sibling_order() {
        assert_eq!(
            compare("<p><inbound/><outbound/></p>", "<p><outbound/><inbound/></p>"),
            StructuralVerdict::Equivalent
        );
    }

    #[test]
    fn test_compare_same_name_sibling_order_matters() {
        assert_eq!(
            compare("<p><s>1</s><s>2</s></p>", "<p><s>2</s><s>1</s></p>"),
            StructuralVerdict::Different
        );
    }

    #[test]
    fn test_compare_value_change() {
        assert_eq!(
            compare(r#"<a value="1"/>"#, r#"<a value="2"/>"#),
            StructuralVerdict::Different
        );
    }

    #[test]
    fn test_compare_undetermined_when_either_side_fails() {
        assert_eq!(compare("<a>", "<a/>"), StructuralVerdict::Undetermined);
        assert_eq!(compare("<a/>", "<a>"), StructuralVerdict::Undetermined);
        assert_eq!(StructuralVerdict::Undetermined.as_bool(), None);
        assert!(!StructuralVerdict::Undetermined.is_determined());
    }

    #[test]
    fn test_compare_excessive_nesting_is_undetermined() {
        let depth = MAX_DEPTH + 10;
        let doc = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
        assert_eq!(compare(&doc, &doc), StructuralVerdict::Undetermined);
    }
}
