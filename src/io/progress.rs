//! Progress display across the problems of one puzzle

use crate::algorithm::solver::Verdict;
use crate::io::configuration::{MIN_PROBLEMS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Tracks solved problems and the running verdict tally
///
/// The bar is only drawn when there are enough problems to be worth it;
/// the tally is kept either way so callers can report it at the end.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    tally: VerdictTally,
}

/// Running count of verdicts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerdictTally {
    /// Problems whose pieces fit
    pub feasible: usize,
    /// Problems proven impossible
    pub infeasible: usize,
    /// Problems that hit the node limit
    pub unknown: usize,
}

impl VerdictTally {
    /// Count one verdict
    pub const fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Feasible => self.feasible += 1,
            Verdict::Infeasible => self.infeasible += 1,
            Verdict::Unknown => self.unknown += 1,
        }
    }

    /// Total number of verdicts recorded
    pub const fn total(&self) -> usize {
        self.feasible + self.infeasible + self.unknown
    }
}

impl ProgressManager {
    /// Create a manager for `problem_count` problems
    ///
    /// With `visible` false, or too few problems, nothing is drawn.
    pub fn new(problem_count: usize, visible: bool) -> Self {
        let bar = (visible && problem_count >= MIN_PROBLEMS_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::with_draw_target(
                Some(problem_count as u64),
                ProgressDrawTarget::stderr(),
            );
            bar.set_style(Self::style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });

        Self {
            bar,
            tally: VerdictTally::default(),
        }
    }

    /// Record a verdict and advance the bar
    pub fn complete_problem(&mut self, verdict: Verdict) {
        self.tally.record(verdict);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!("{} fit", self.tally.feasible));
        }
    }

    /// Verdicts recorded so far
    pub const fn tally(&self) -> VerdictTally {
        self.tally
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Regions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
