/// Where a pointer press landed, relative to the filter panel's subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    FilterPanel,
    Outside,
}

/// Visibility of the filter panel. Starts closed; the trigger button toggles
/// it, and a press outside the panel dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterDialog {
    Open,
    #[default]
    Closed,
}

impl FilterDialog {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
    }

    pub fn pointer_pressed(&mut self, target: PointerTarget) {
        if *self == Self::Open && target == PointerTarget::Outside {
            *self = Self::Closed;
        }
    }
}
