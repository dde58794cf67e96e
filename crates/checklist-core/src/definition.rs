//! Checklist Definition
//!
//! The fixed, ordered list of milestone statements. Index is identity.

/// An immutable, ordered list of milestone labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistDefinition {
    milestones: &'static [&'static str],
}

impl ChecklistDefinition {
    pub const fn new(milestones: &'static [&'static str]) -> Self {
        Self { milestones }
    }

    /// Number of milestones (N)
    pub const fn len(&self) -> usize {
        self.milestones.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// Label at `index`, if in range
    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.milestones.get(index).copied()
    }

    /// Iterate labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.milestones.iter().copied()
    }
}

/// Milestones of the "What is Programming?" lesson
pub const PROGRAMMING_MILESTONES: ChecklistDefinition = ChecklistDefinition::new(&[
    "Computers are literal; instructions must be precise",
    "Programs use sequences, conditionals, loops, and repetitions",
    "Understand syntax, logic, algorithms, and debugging",
    "Programming languages translate human logic to machine code",
    "Break problems into smaller steps",
    "Testing and debugging are essential",
    "Build websites, apps, games, AI, and embedded software",
    "Empowers you to automate, create, and solve problems",
]);
