/// Completion snapshot of a tracked form, recomputed from scratch on every
/// input so the result never depends on event ordering.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Progress {
    pub filled: usize,
    pub total: usize,
}

impl Progress {
    pub fn measure<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut filled = 0;
        let mut total = 0;
        for value in values {
            total += 1;
            if !value.trim().is_empty() {
                filled += 1;
            }
        }
        Self { filled, total }
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.filled as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.filled == self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.filled
    }

    pub fn status_line(&self) -> String {
        if self.is_complete() {
            "All fields completed - Ready for prediction!".to_string()
        } else {
            format!(
                "{}% completed - {} fields remaining",
                self.percent().round(),
                self.remaining()
            )
        }
    }
}

/// Submission gate: every required value must be non-empty once trimmed.
pub fn required_complete<'a>(values: impl Iterator<Item = &'a str>) -> bool {
    let mut values = values.peekable();
    values.peek().is_some() && values.all(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_ratio_of_filled_to_total() {
        let p = Progress::measure(["45", "", "M", ""].into_iter());
        assert_eq!(p, Progress { filled: 2, total: 4 });
        assert_eq!(p.percent(), 50.0);
        assert_eq!(p.remaining(), 2);
    }

    #[test]
    fn whitespace_only_does_not_count_as_filled() {
        let p = Progress::measure(["  ", "x"].into_iter());
        assert_eq!(p.filled, 1);
    }

    #[test]
    fn status_line_rounds_for_display() {
        let p = Progress::measure(["a", "", ""].into_iter());
        assert_eq!(p.status_line(), "33% completed - 2 fields remaining");
    }

    #[test]
    fn status_switches_at_completion() {
        let p = Progress::measure(["a", "b"].into_iter());
        assert!(p.is_complete());
        assert_eq!(p.status_line(), "All fields completed - Ready for prediction!");
    }

    #[test]
    fn empty_form_is_never_complete() {
        let p = Progress::measure(std::iter::empty());
        assert!(!p.is_complete());
        assert_eq!(p.percent(), 0.0);
    }

    #[test]
    fn required_gate() {
        assert!(required_complete(["45", "M"].into_iter()));
        assert!(!required_complete(["45", "  "].into_iter()));
        assert!(!required_complete(std::iter::empty()));
    }
}
