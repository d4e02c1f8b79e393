//! Attribute paths into a configuration tree
//!
//! Paths are written Terraform-style: `owners[2].rank`. The dotted index form
//! `owners.2.rank` is accepted as well.

use serde::{Serialize, Serializer};
use std::fmt;

/// A single step in an attribute path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathStep {
    /// Named attribute
    Attr(String),
    /// Element of a list block
    Index(usize),
}

/// Path from the configuration root to an attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttrPath {
    steps: Vec<PathStep>,
}

impl AttrPath {
    /// Path to a top-level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::Attr(name.into())],
        }
    }

    /// Parse a path string. Never fails: malformed index brackets stay part of the name.
    pub fn parse(path: &str) -> Self {
        let mut steps = Vec::new();
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            if let Ok(index) = segment.parse::<usize>() {
                steps.push(PathStep::Index(index));
                continue;
            }
            let (name, indices) = split_indices(segment);
            if !name.is_empty() {
                steps.push(PathStep::Attr(name.to_string()));
            }
            steps.extend(indices.into_iter().map(PathStep::Index));
        }
        Self { steps }
    }

    /// Append a named attribute step
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.steps.push(PathStep::Attr(name.into()));
        self
    }

    /// Append a list index step
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(PathStep::Index(index));
        self
    }

    /// Steps of this path
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Whether the path has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Name of the last attribute step, if any
    pub fn leaf_name(&self) -> Option<&str> {
        self.steps.iter().rev().find_map(|step| match step {
            PathStep::Attr(name) => Some(name.as_str()),
            PathStep::Index(_) => None,
        })
    }
}

/// Split `name[1][2]` into `("name", [1, 2])`. Returns the whole segment when brackets are malformed.
fn split_indices(segment: &str) -> (&str, Vec<usize>) {
    let Some(open) = segment.find('[') else {
        return (segment, Vec::new());
    };

    let mut indices = Vec::new();
    let mut rest = &segment[open..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let Some(close) = stripped.find(']') else {
            return (segment, Vec::new());
        };
        match stripped[..close].parse::<usize>() {
            Ok(index) => indices.push(index),
            Err(_) => return (segment, Vec::new()),
        }
        rest = &stripped[close + 1..];
    }

    if rest.is_empty() {
        (&segment[..open], indices)
    } else {
        (segment, Vec::new())
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                PathStep::Attr(name) if i == 0 => write!(f, "{name}")?,
                PathStep::Attr(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for AttrPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for AttrPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl Serialize for AttrPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
