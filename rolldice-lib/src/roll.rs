pub mod group;

use group::Group;

/// Keep the ordered group results of one dice string
#[derive(Debug, Clone)]
pub struct Outcome {
    groups: Vec<Group>,
}

impl Outcome {
    pub(crate) fn new(groups: Vec<Group>) -> Self {
        Outcome { groups }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Render every group in order. Compact mode prints only the final
    /// values, space separated on one line; separate mode prints one
    /// annotated line per group.
    pub fn render(&self, separate: bool) -> String {
        let mut out = String::new();
        for (count, group) in self.groups.iter().enumerate() {
            if separate {
                out.push_str(&format!("Roll #{}: {}\n", count + 1, group));
            } else {
                out.push_str(&group.total().to_string());
                out.push(if count + 1 == self.groups.len() { '\n' } else { ' ' });
            }
        }
        out
    }
}

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
