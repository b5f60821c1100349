//! Exercise log filtering and response shaping.
//!
//! [`LogFilter`] narrows an owner's entries by an exclusive date window and
//! then truncates to a count limit. The relative order of the input is always
//! preserved: the limit keeps the *first* `n` matches, not the latest.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Exercise, ExerciseDate, UserId, Username};

/// Optional filters applied to an exercise log.
///
/// Both date bounds are exclusive: `from` keeps entries strictly after it and
/// `to` keeps entries strictly before it.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{ExerciseDate, LogFilter};
///
/// let from: ExerciseDate = "2023-01-10".parse().expect("valid date");
/// let filter = LogFilter::default().with_from(from).with_limit(2);
///
/// assert!(!filter.admits("2023-01-10".parse().expect("valid date")));
/// assert!(filter.admits("2023-01-11".parse().expect("valid date")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    from: Option<ExerciseDate>,
    to: Option<ExerciseDate>,
    limit: Option<usize>,
}

impl LogFilter {
    /// Keep only entries dated strictly after `from`.
    #[must_use]
    pub fn with_from(mut self, from: ExerciseDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Keep only entries dated strictly before `to`.
    #[must_use]
    pub fn with_to(mut self, to: ExerciseDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Keep at most the first `limit` matching entries.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `date` falls inside the exclusive window.
    #[must_use]
    pub fn admits(&self, date: ExerciseDate) -> bool {
        self.from.is_none_or(|from| date > from) && self.to.is_none_or(|to| date < to)
    }

    /// Filter `exercises` by date window, then truncate to the limit.
    #[must_use]
    pub fn apply(&self, exercises: Vec<Exercise>) -> Vec<Exercise> {
        let limit = self.limit.unwrap_or(usize::MAX);
        exercises
            .into_iter()
            .filter(|exercise| self.admits(exercise.date()))
            .take(limit)
            .collect()
    }
}

/// Filtered exercise history of a single user.
///
/// ## Invariants
/// - `count == log.len()`; the count always reflects the filtered log.
/// - `username` is `None` when the user is unknown and is then omitted from
///   JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    /// The id as queried; it need not belong to any user.
    #[schema(example = "SkQ3x_9a")]
    user_id: String,
    #[schema(value_type = Option<String>, example = "alice")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<Username>,
    count: usize,
    log: Vec<Exercise>,
}

impl ExerciseLog {
    /// Assemble a log, deriving `count` from the entries.
    #[must_use]
    pub fn new(user_id: UserId, username: Option<Username>, log: Vec<Exercise>) -> Self {
        Self {
            user_id: user_id.into(),
            username,
            count: log.len(),
            log,
        }
    }

    /// Empty log for an id no user can hold, such as one with whitespace.
    #[must_use]
    pub fn unmatched(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: None,
            count: 0,
            log: Vec::new(),
        }
    }

    /// Id the log was requested for.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Username of the user, if known.
    #[must_use]
    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    /// Number of entries in the log.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Filtered entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Exercise] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, ExerciseDuration};
    use rstest::{fixture, rstest};

    fn date(text: &str) -> ExerciseDate {
        text.parse().expect("valid fixture date")
    }

    fn exercise(description: &str, on: &str) -> Exercise {
        Exercise::new(
            UserId::new("owner").expect("valid id"),
            Description::new(description).expect("valid description"),
            ExerciseDuration::new(20),
            date(on),
            None,
        )
    }

    fn descriptions(exercises: &[Exercise]) -> Vec<&str> {
        exercises
            .iter()
            .map(|exercise| exercise.description().as_ref())
            .collect()
    }

    /// Five entries in insertion order; dates are deliberately not sorted.
    #[fixture]
    fn history() -> Vec<Exercise> {
        vec![
            exercise("a", "2023-01-12"),
            exercise("b", "2023-01-10"),
            exercise("c", "2023-01-08"),
            exercise("d", "2023-01-11"),
            exercise("e", "2023-01-09"),
        ]
    }

    #[rstest]
    fn no_filter_returns_everything_in_order(history: Vec<Exercise>) {
        let kept = LogFilter::default().apply(history);
        assert_eq!(descriptions(&kept), ["a", "b", "c", "d", "e"]);
    }

    #[rstest]
    fn from_is_an_exclusive_lower_bound(history: Vec<Exercise>) {
        let kept = LogFilter::default().with_from(date("2023-01-10")).apply(history);
        assert_eq!(descriptions(&kept), ["a", "d"]);
    }

    #[rstest]
    fn to_is_an_exclusive_upper_bound(history: Vec<Exercise>) {
        let kept = LogFilter::default().with_to(date("2023-01-10")).apply(history);
        assert_eq!(descriptions(&kept), ["c", "e"]);
    }

    #[rstest]
    fn window_combines_both_bounds(history: Vec<Exercise>) {
        let kept = LogFilter::default()
            .with_from(date("2023-01-08"))
            .with_to(date("2023-01-12"))
            .apply(history);
        assert_eq!(descriptions(&kept), ["b", "d", "e"]);
    }

    #[rstest]
    fn inverted_window_is_empty(history: Vec<Exercise>) {
        let kept = LogFilter::default()
            .with_from(date("2023-01-11"))
            .with_to(date("2023-01-10"))
            .apply(history);
        assert!(kept.is_empty());
    }

    #[rstest]
    #[case(0, &[])]
    #[case(2, &["a", "b"])]
    #[case(9, &["a", "b", "c", "d", "e"])]
    fn limit_keeps_first_entries(
        history: Vec<Exercise>,
        #[case] limit: usize,
        #[case] expected: &[&str],
    ) {
        let kept = LogFilter::default().with_limit(limit).apply(history);
        assert_eq!(descriptions(&kept), expected);
    }

    #[rstest]
    fn limit_applies_after_date_filtering(history: Vec<Exercise>) {
        let kept = LogFilter::default()
            .with_to(date("2023-01-11"))
            .with_limit(2)
            .apply(history);
        assert_eq!(descriptions(&kept), ["b", "c"]);
    }

    #[rstest]
    fn log_count_tracks_entries(history: Vec<Exercise>) {
        let log = ExerciseLog::new(UserId::new("owner").expect("valid id"), None, history);
        assert_eq!(log.count(), log.entries().len());
        assert_eq!(log.count(), 5);
    }

    #[rstest]
    fn empty_log_serialises_without_username() {
        let log = ExerciseLog::new(UserId::new("nobody").expect("valid id"), None, Vec::new());
        let value = serde_json::to_value(&log).expect("serialise log");
        assert_eq!(
            value,
            serde_json::json!({ "userId": "nobody", "count": 0, "log": [] })
        );
    }

    #[rstest]
    fn unmatched_log_echoes_the_raw_id() {
        let log = ExerciseLog::unmatched("no body");
        assert_eq!(log.user_id(), "no body");
        assert_eq!(log.count(), 0);
        assert!(log.username().is_none());
    }
}
