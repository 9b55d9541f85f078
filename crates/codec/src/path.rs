//! Coding paths for decode diagnostics.

use std::fmt;

/// The sequence of element and field names traversed from the document root
/// to the current decode position.
///
/// Segments for members of heterogeneous sequences carry their position among
/// the parent's element children, so a failure inside the second item of a
/// `part-list` renders as `part-list/score-part[1]/part-name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlPath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PathSegment {
    name: String,
    index: Option<usize>,
}

impl XmlPath {
    /// A path consisting of the document root element alone.
    pub fn root(name: impl Into<String>) -> Self {
        XmlPath {
            segments: vec![PathSegment {
                name: name.into(),
                index: None,
            }],
        }
    }

    /// Returns this path extended by a child or field name.
    pub fn child(&self, name: &str) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment {
            name: name.to_string(),
            index: None,
        });
        path
    }

    /// Returns this path extended by a positioned child, for members of
    /// ordered sequences.
    pub fn indexed(&self, name: &str, index: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment {
            name: name.to_string(),
            index: Some(index),
        });
        path
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for XmlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&segment.name)?;
            if let Some(index) = segment.index {
                write!(f, "[{}]", index)?;
            }
        }
        Ok(())
    }
}
