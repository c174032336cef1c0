use crate::scalar::CircularString;

/// A collection of [`CircularString`]s.
///
/// Any collection of circular strings is valid, including empty members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiCircularString {
    curves: Vec<CircularString>,
}

impl MultiCircularString {
    pub fn new(curves: Vec<CircularString>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[CircularString] {
        &self.curves
    }

    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(CircularString::is_empty)
    }

    /// True iff there is at least one curve and every curve is closed.
    pub fn is_closed(&self) -> bool {
        if self.curves.is_empty() {
            return false;
        }
        self.curves.iter().all(CircularString::is_closed)
    }

    pub fn dimension(&self) -> usize {
        1
    }

    pub fn boundary_dimension(&self) -> Option<usize> {
        if self.is_closed() {
            None
        } else {
            Some(0)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::circularstring::{cs0, cs_closed};

    #[test]
    fn closed_only_when_every_member_closed() {
        assert!(!MultiCircularString::new(vec![]).is_closed());
        assert!(MultiCircularString::new(vec![cs_closed(), cs_closed()]).is_closed());
        assert!(!MultiCircularString::new(vec![cs_closed(), cs0()]).is_closed());
        assert!(!MultiCircularString::new(vec![CircularString::empty()]).is_closed());
    }

    #[test]
    fn empty_members_allowed() {
        let mcs = MultiCircularString::new(vec![CircularString::empty()]);
        assert_eq!(mcs.num_curves(), 1);
        assert!(mcs.is_empty());
        assert_eq!(mcs.boundary_dimension(), Some(0));
    }
}
