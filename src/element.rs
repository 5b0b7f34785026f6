use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// Bounding rectangle of a matched element, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// One element located by an engine query.
///
/// A snapshot of the element's geometry and descriptive metadata at query
/// time; it holds no live handle and cannot perform actions itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementMatch {
    #[serde(default, skip_serializing_if = "is_empty_string")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    pub rect: Rect,
    #[serde(default, skip_serializing_if = "is_empty_string")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "is_empty_string")]
    pub description: Option<String>,
}

impl ElementMatch {
    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a display name for this element
    pub fn display_name(&self) -> String {
        self.text
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| self.class_name.clone())
    }
}

impl fmt::Display for ElementMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "    Class         - {}", self.class_name)?;
        writeln!(
            f,
            "    Description   - {}",
            self.description.as_deref().unwrap_or("")
        )?;
        if let Some(text) = &self.text {
            writeln!(f, "    Text          - {text}")?;
        }
        writeln!(f, "    ID            - {}", self.id.as_deref().unwrap_or(""))?;
        writeln!(
            f,
            "    Rect          - {} x {}, {} x {}",
            self.rect.x, self.rect.y, self.rect.width, self.rect.height
        )?;
        write!(f, "}}")
    }
}

/// Render a match set as an indexed, human-readable block list, the format
/// forwarded to the device log by `App::log_matches`.
pub fn describe_matches(matches: &[ElementMatch]) -> String {
    let mut out = String::new();
    for (index, m) in matches.iter().enumerate() {
        let _ = writeln!(out, "{{");
        let _ = writeln!(out, "    Index         - {index}");
        // Reuse the per-element block body, minus its outer braces.
        let block = m.to_string();
        for line in block.lines().skip(1) {
            if line == "}" {
                break;
            }
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);
    }
    out
}

fn is_empty_string(opt: &Option<String>) -> bool {
    match opt {
        Some(s) => s.is_empty(),
        None => true,
    }
}
