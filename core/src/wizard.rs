//! Bounded step counter shared by the release and video wizards.

/// Index of the last step of every wizard.
pub const LAST_STEP: u8 = 3;

/// Wizard position, always within `0..=LAST_STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(0);

    /// Clamp any index into range.
    pub fn new(index: u8) -> Self {
        Step(index.min(LAST_STEP))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Step::new(self.0.saturating_add(1))
    }

    pub fn back(self) -> Self {
        Step(self.0.saturating_sub(1))
    }

    pub fn is_last(self) -> bool {
        self.0 == LAST_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_range() {
        let mut step = Step::FIRST;
        for _ in 0..10 {
            step = step.next();
        }
        assert_eq!(step.index(), LAST_STEP);
        assert!(step.is_last());

        for _ in 0..10 {
            step = step.back();
        }
        assert_eq!(step, Step::FIRST);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Step::new(7).index(), 3);
        assert_eq!(Step::new(2).index(), 2);
    }
}
