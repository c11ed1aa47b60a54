//! Skill levels for the skills chart.

use serde::{Deserialize, Serialize};

/// Maximum skill level; higher values are clamped when charted.
pub const MAX_LEVEL: u64 = 100;

/// A named proficiency from 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u64,
}

impl Skill {
    /// Level clamped to the chartable range.
    pub fn clamped_level(&self) -> u64 {
        self.level.min(MAX_LEVEL)
    }

    /// Textual bar of `width` cells for CLI output.
    pub fn bar(&self, width: usize) -> String {
        let filled = (self.clamped_level() as usize * width) / MAX_LEVEL as usize;
        let mut bar = String::with_capacity(width * '█'.len_utf8());
        for i in 0..width {
            bar.push(if i < filled { '█' } else { '░' });
        }
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: u64) -> Skill {
        Skill {
            name: "Testing".to_string(),
            level,
        }
    }

    #[test]
    fn levels_above_the_maximum_are_clamped() {
        assert_eq!(skill(250).clamped_level(), MAX_LEVEL);
        assert_eq!(skill(85).clamped_level(), 85);
    }

    #[test]
    fn bar_is_always_the_requested_width() {
        for level in [0, 33, 50, 100, 200] {
            assert_eq!(skill(level).bar(20).chars().count(), 20);
        }
    }

    #[test]
    fn bar_fill_is_proportional_to_level() {
        let bar = skill(50).bar(10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(skill(0).bar(10).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(
            skill(100).bar(10).chars().filter(|c| *c == '█').count(),
            10
        );
    }
}
