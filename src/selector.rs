use serde::{Deserialize, Serialize};

/// Describes the element set a helper operates on.
///
/// The helpers never interpret a selector; it is handed to the engine
/// verbatim, which owns the matching semantics. `Selector::Any` matches
/// every element in the current tree and is what the scroll loop uses to
/// pick its reference element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// Every element in the current UI tree.
    Any,
    /// Select by accessibility mark (id, label or content description).
    Marked(String),
    /// Select by resource/automation id.
    Id(String),
    /// Select by visible text content.
    Text(String),
    /// Select by widget class name.
    ClassName(String),
    /// An unrecognized shorthand string, with a reason.
    Invalid(String),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Any => write!(f, "*"),
            Selector::Marked(m) => write!(f, "marked:{m}"),
            Selector::Id(id) => write!(f, "id:{id}"),
            Selector::Text(t) => write!(f, "text:{t}"),
            Selector::ClassName(c) => write!(f, "class:{c}"),
            Selector::Invalid(reason) => write!(f, "invalid:{reason}"),
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s == "*" || s.eq_ignore_ascii_case("all") {
            return Selector::Any;
        }
        if let Some(id) = s.strip_prefix('#') {
            return Selector::Id(id.to_string());
        }
        // Prefixes match case-insensitively; the value keeps its case.
        if let Some(id) = strip_prefix_ignore_case(s, "id:") {
            return Selector::Id(id.to_string());
        }
        if let Some(text) = strip_prefix_ignore_case(s, "text:") {
            return Selector::Text(text.to_string());
        }
        if let Some(mark) = strip_prefix_ignore_case(s, "marked:") {
            return Selector::Marked(mark.to_string());
        }
        if let Some(class) = strip_prefix_ignore_case(s, "class:") {
            return Selector::ClassName(class.to_string());
        }
        if let Some(class) = strip_prefix_ignore_case(s, "classname:") {
            return Selector::ClassName(class.to_string());
        }
        if s.contains(':') {
            return Selector::Invalid(format!(
                "Unknown selector format: \"{s}\". Use '*', 'marked:', 'id:', 'text:' or 'class:'."
            ));
        }
        // Bare strings are treated as marks, the common case in test code.
        Selector::Marked(s.to_string())
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector::from(s.as_str())
    }
}
