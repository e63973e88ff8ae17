//! Conflict marker stripping
//!
//! A line-oriented state machine that removes Git conflict regions from file
//! content, keeping the HEAD ("ours") section and discarding the other side.
//! Marker text is an external format contract written by Git itself, so the
//! literals are matched exactly.

/// Start of a conflict region. The trailing head label is part of the match.
pub const CONFLICT_START: &str = "<<<<<<< HEAD";

/// Separator between the kept and discarded sections of a region.
pub const CONFLICT_SEPARATOR: &str = "=======";

/// End of a conflict region. The trailing space disambiguates from unrelated
/// text that merely starts with angle brackets.
pub const CONFLICT_END: &str = ">>>>>>> ";

/// Scanner position relative to conflict regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Not inside any conflict region
    Outside,
    /// Inside a region, before the separator; lines are retained
    KeepOurs,
    /// Inside a region, after the separator; lines are discarded
    DropTheirs,
}

/// Line-by-line scanner over conflict-marked content.
///
/// Regions may nest: every start marker increments the depth counter and only
/// a matching count of end markers returns the scanner to [`ScanState::Outside`].
#[derive(Debug)]
pub struct MarkerScanner {
    state: ScanState,
    depth: usize,
}

impl MarkerScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Outside,
            depth: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Advance the scanner by one line.
    ///
    /// Returns `true` when the line belongs in the cleaned output. Marker
    /// lines themselves are never emitted; regular lines are emitted unless
    /// the scanner sits in the discarded half of a region.
    pub fn feed(&mut self, line: &str) -> bool {
        if line.starts_with(CONFLICT_START) {
            self.depth += 1;
            self.state = ScanState::KeepOurs;
            false
        } else if line.starts_with(CONFLICT_SEPARATOR) {
            match self.state {
                // A bare separator outside any open conflict is an ordinary
                // line (e.g. a horizontal-rule comment) and passes through.
                ScanState::Outside => true,
                ScanState::KeepOurs | ScanState::DropTheirs => {
                    self.state = ScanState::DropTheirs;
                    false
                }
            }
        } else if line.starts_with(CONFLICT_END) {
            // A stray end marker at depth zero is consumed without effect.
            if self.depth > 0 {
                self.depth -= 1;
                if self.depth == 0 {
                    self.state = ScanState::Outside;
                }
            }
            false
        } else {
            matches!(self.state, ScanState::Outside | ScanState::KeepOurs)
        }
    }
}

impl Default for MarkerScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse pre-check: does the content contain any marker literal at all?
///
/// This is a substring test used to skip files that need no work. It does not
/// validate well-formedness and may disagree with the structural scan on
/// malformed content; that distinction is deliberate.
pub fn has_conflict_markers(content: &str) -> bool {
    content.contains(CONFLICT_START)
        || content.contains(CONFLICT_SEPARATOR)
        || content.contains(CONFLICT_END)
}

/// Remove conflict regions from `content`, resolving each in favor of the
/// "ours" side. Retained lines are rejoined with `\n`; no trailing-newline
/// normalization beyond what joining naturally produces.
///
/// An unterminated conflict leaves the rest of the file governed by whichever
/// sub-state was last entered. That is accepted source behavior, not
/// corrected here.
pub fn strip_conflict_markers(content: &str) -> String {
    let mut scanner = MarkerScanner::new();
    let kept: Vec<&str> = content.split('\n').filter(|line| scanner.feed(line)).collect();
    kept.join("\n")
}
