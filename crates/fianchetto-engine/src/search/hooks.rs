//! Notification hooks and the values they receive.

use std::fmt;

use fianchetto_core::Square;

/// One root move finished at the current depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub depth: u32,
    pub from: Square,
    pub to: Square,
    pub score: i32,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth {}: {}{} ({})", self.depth, self.from, self.to, self.score)
    }
}

/// Summary of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// The searching side was White.
    pub maximizing: bool,
    pub elapsed_ms: u64,
    pub depth: u32,
}

type ProgressFn<'a> = dyn Fn(&Progress) + Sync + 'a;
type StatsFn<'a> = dyn Fn(&SearchStats) + 'a;

/// Optional callbacks. Neither influences the move chosen.
///
/// The progress callback runs on worker threads, so it must be `Sync`.
#[derive(Default)]
pub struct SearchHooks<'a> {
    progress: Option<Box<ProgressFn<'a>>>,
    stats: Option<Box<StatsFn<'a>>>,
}

impl<'a> SearchHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_progress(mut self, f: impl Fn(&Progress) + Sync + 'a) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    pub fn on_stats(mut self, f: impl Fn(&SearchStats) + 'a) -> Self {
        self.stats = Some(Box::new(f));
        self
    }

    pub(crate) fn progress(&self) -> Option<&ProgressFn<'a>> {
        self.progress.as_deref()
    }

    pub(crate) fn report_stats(&self, stats: &SearchStats) {
        if let Some(f) = &self.stats {
            f(stats);
        }
    }
}

impl fmt::Debug for SearchHooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchHooks")
            .field("progress", &self.progress.is_some())
            .field("stats", &self.stats.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn progress_display() {
        let progress = Progress {
            depth: 3,
            from: Square::E2,
            to: Square::E4,
            score: 35,
        };
        assert_eq!(progress.to_string(), "depth 3: e2e4 (35)");
    }

    #[test]
    fn stats_sink_receives_the_summary() {
        let seen = Cell::new(None);
        let hooks = SearchHooks::new().on_stats(|s: &SearchStats| seen.set(Some(*s)));
        let stats = SearchStats {
            maximizing: false,
            elapsed_ms: 12,
            depth: 4,
        };
        hooks.report_stats(&stats);
        assert_eq!(seen.get(), Some(stats));
        assert!(hooks.progress().is_none());
    }
}
