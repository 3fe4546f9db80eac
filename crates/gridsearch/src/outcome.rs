use gridsearch_core::Path;

/// The result of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A non-empty path from start to goal.
    Found(Path),
    /// Start and goal are the same cell; no move is needed.
    AlreadyAtGoal,
    /// The goal is not reachable from the start.
    NoRoute,
    /// The strategy hit its depth or step cap before reaching the goal.
    BudgetExhausted,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Whether the caller is, or can get, to the goal.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_) | Self::AlreadyAtGoal)
    }

    /// The path, if one was found.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Collapse into a plain path: the found path, or an empty one in every
    /// other case.
    pub fn into_path(self) -> Path {
        match self {
            Self::Found(p) => p,
            _ => Path::new(),
        }
    }
}

/// An [`Outcome`] together with how much work the search did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    /// Cells expanded. For the random walk, accepted steps.
    pub expanded: usize,
}

impl Report {
    #[inline]
    pub(crate) fn found(path: Path, expanded: usize) -> Self {
        debug_assert!(!path.is_empty());
        Self {
            outcome: Outcome::Found(path),
            expanded,
        }
    }

    #[inline]
    pub(crate) fn already_at_goal() -> Self {
        Self {
            outcome: Outcome::AlreadyAtGoal,
            expanded: 0,
        }
    }

    #[inline]
    pub(crate) fn no_route(expanded: usize) -> Self {
        Self {
            outcome: Outcome::NoRoute,
            expanded,
        }
    }

    #[inline]
    pub(crate) fn exhausted(expanded: usize) -> Self {
        Self {
            outcome: Outcome::BudgetExhausted,
            expanded,
        }
    }

    /// Collapse into a plain path. See [`Outcome::into_path`].
    #[inline]
    pub fn into_path(self) -> Path {
        self.outcome.into_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Move;

    #[test]
    fn failures_collapse_to_empty_path() {
        assert!(Outcome::NoRoute.into_path().is_empty());
        assert!(Outcome::BudgetExhausted.into_path().is_empty());
        assert!(Outcome::AlreadyAtGoal.into_path().is_empty());
    }

    #[test]
    fn already_at_goal_is_success_without_path() {
        let o = Outcome::AlreadyAtGoal;
        assert!(o.is_success());
        assert!(!o.is_found());
        assert_eq!(o.path(), None);
        assert!(!Outcome::NoRoute.is_success());
    }

    #[test]
    fn found_keeps_path() {
        let p = Path::from(vec![Move::Up]);
        let r = Report::found(p.clone(), 3);
        assert_eq!(r.outcome.path(), Some(&p));
        assert_eq!(r.into_path(), p);
    }
}
