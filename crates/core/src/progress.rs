#![forbid(unsafe_code)]

//! Pure progress derivation: the completed-step percentage and the
//! all-criteria-true predicate that defines step completion.

/// Round-half-up integer percentage of completed steps.
///
/// Matches the displayed percentages exactly: 3 of 5 is 60, 2 of 3 is 67.
/// `total_steps` comes from a resolved method and is therefore at least 1;
/// a zero total yields 0 rather than dividing.
pub fn completion_percent(completed_steps: usize, total_steps: usize) -> u8 {
    if total_steps == 0 {
        return 0;
    }
    let completed = completed_steps.min(total_steps);
    ((completed * 200 + total_steps) / (total_steps * 2)) as u8
}

/// A step is complete exactly when every criterion flag is set.
pub fn step_complete(criteria: &[bool]) -> bool {
    criteria.iter().all(|flag| *flag)
}
