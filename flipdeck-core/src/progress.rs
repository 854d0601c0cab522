use std::fmt;

/// Share of distinct cards that have been the current card this session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub seen_count: usize,
    pub total: usize,
    pub percent: u32,
}

impl Progress {
    pub fn of(seen: &[bool]) -> Self {
        let total = seen.len();
        let seen_count = seen.iter().filter(|s| **s).count();
        let percent = if total == 0 {
            0
        } else {
            (seen_count as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            seen_count,
            total,
            percent,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} cards seen ({}%)",
            self.seen_count, self.total, self.percent
        )
    }
}
