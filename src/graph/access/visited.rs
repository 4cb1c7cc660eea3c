//! Visited sets for graph traversals.
//!
//! Items are identified by position, so a dense flag vector sized to the
//! graph is enough. Traversals mark a position when it is discovered (pushed
//! onto the frontier), not when it is processed; this keeps every position in
//! the frontier at most once and makes traversal of cyclic graphs terminate.

/// A per-position visited flag vector.
#[derive(Debug, Clone)]
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Returns `true` iff `idx` was not yet visited, marking it visited.
    ///
    /// Positions past the end are never visited and always return `false`.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, idx: usize) -> bool {
        match self.flags.get_mut(idx) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_marks_once() {
        let mut visited = VisitedFlags::new(3);
        assert!(visited.try_visit(1));
        assert!(!visited.try_visit(1));
        assert!(visited.try_visit(0));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut visited = VisitedFlags::new(1);
        assert!(!visited.try_visit(5));
        assert!(visited.try_visit(0));
    }
}
