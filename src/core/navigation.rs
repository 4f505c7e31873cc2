/// Picks the next card that should take keyboard focus.
///
/// Eligibility is computed by the caller (a card wants focus while it is
/// unsolved and either empty or marked incorrect). The scan starts just
/// after `current` and wraps around from the top, so with nothing else
/// open it can legitimately land back on `current`. Returns `None` once
/// no card is eligible.
pub fn next_focus_target(eligible: &[bool], current: usize) -> Option<usize> {
    for i in (current + 1)..eligible.len() {
        if eligible[i] {
            return Some(i);
        }
    }
    eligible.iter().position(|&open| open)
}
