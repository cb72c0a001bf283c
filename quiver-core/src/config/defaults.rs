//! Default values for `SelectionConfig`.

/// Hard ceiling on the number of questions a single request may return.
pub const DEFAULT_MAX_QUESTIONS: usize = 120;

/// How many candidates the "unanswered" strategy over-fetches per target
/// question before subtracting the answered set. A heuristic; under-fill
/// triggers a fallback to the full matching set regardless.
pub const DEFAULT_UNANSWERED_BUFFER_MULTIPLIER: usize = 3;

/// Attempt budget multiplier for the random-rank draw loop:
/// `min(desired * multiplier, scope_size)` attempts before accepting a
/// below-target yield.
pub const DEFAULT_DRAW_ATTEMPT_MULTIPLIER: usize = 3;

/// Upper bound on the number of records any fallback indexed scan may
/// materialize, so long scans stay inside the platform request timeout.
pub const DEFAULT_SCAN_RESULT_CAP: usize = 10_000;
