use crate::scalar::LineString;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(LineString::is_empty)
    }

    /// True iff there is at least one line and every line is closed.
    pub fn is_closed(&self) -> bool {
        !self.lines.is_empty() && self.lines.iter().all(LineString::is_closed)
    }
}

impl From<geo::MultiLineString> for MultiLineString {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}
