//! Classification of PO comment lines.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The five comment taxonomies of a PO catalog, keyed by their line prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// `# text` written by a translator.
    Translator,
    /// `#. text` extracted from source code.
    Extracted,
    /// `#: file:line` source references.
    Reference,
    /// `#, flag, flag` such as `fuzzy` or `c-format`.
    Flag,
    /// `#| msgid "..."` previous untranslated string.
    Previous,
}

impl CommentKind {
    /// Two-character prefixes, checked before falling back to a bare `#`.
    const QUALIFIED: [(&'static str, CommentKind); 4] = [
        ("#.", CommentKind::Extracted),
        ("#:", CommentKind::Reference),
        ("#,", CommentKind::Flag),
        ("#|", CommentKind::Previous),
    ];

    /// Returns the line prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            CommentKind::Translator => "#",
            CommentKind::Extracted => "#.",
            CommentKind::Reference => "#:",
            CommentKind::Flag => "#,",
            CommentKind::Previous => "#|",
        }
    }
}

impl Display for CommentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentKind::Translator => write!(f, "translator"),
            CommentKind::Extracted => write!(f, "extracted"),
            CommentKind::Reference => write!(f, "reference"),
            CommentKind::Flag => write!(f, "flag"),
            CommentKind::Previous => write!(f, "previous"),
        }
    }
}

/// A classified comment line with its prefix removed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Text after the prefix, trimmed of surrounding whitespace.
    pub payload: String,
}

impl Comment {
    /// Classifies a raw line that starts with `#`.
    ///
    /// Lines shorter than two characters are empty translator comments.
    pub fn parse(line: &str) -> Self {
        if line.len() < 2 {
            return Comment {
                kind: CommentKind::Translator,
                payload: String::new(),
            };
        }

        for (prefix, kind) in CommentKind::QUALIFIED {
            if let Some(rest) = line.strip_prefix(prefix) {
                return Comment {
                    kind,
                    payload: rest.trim().to_string(),
                };
            }
        }

        let rest = line.strip_prefix('#').unwrap_or(line);
        Comment {
            kind: CommentKind::Translator,
            payload: rest.trim().to_string(),
        }
    }

    /// Whether this is a flag comment carrying the `fuzzy` marker.
    pub fn marks_fuzzy(&self) -> bool {
        self.kind == CommentKind::Flag && self.payload.contains("fuzzy")
    }

    /// Flags of a flag comment, split on commas and trimmed. Empty for other kinds.
    pub fn flags(&self) -> Vec<&str> {
        if self.kind != CommentKind::Flag {
            return Vec::new();
        }
        self.payload
            .split(',')
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
            .collect()
    }
}

impl Display for Comment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.payload.is_empty() {
            write!(f, "{}", self.kind.prefix())
        } else {
            write!(f, "{} {}", self.kind.prefix(), self.payload)
        }
    }
}
