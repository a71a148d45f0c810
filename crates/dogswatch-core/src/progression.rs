//! The canonical rollout order. Anything that needs "the next step" asks
//! [`next`]; nothing else encodes the order.

use crate::error::{DogswatchError, Result};
use crate::marker::Action;

/// Forward progression of one update cycle. The last step is absorbing.
pub static PROGRESSION: [Action; 5] = [
    Action::Reset,
    Action::Stabilize,
    Action::PrepareUpdate,
    Action::PerformUpdate,
    Action::RebootUpdate,
];

/// Returns the step that follows `current`.
///
/// `Unknown` leads to the first step and the final step leads to itself.
/// Tokens outside the table fail with [`DogswatchError::UnrecognizedAction`].
pub fn next(current: &Action) -> Result<Action> {
    if *current == Action::Unknown {
        return Ok(PROGRESSION[0].clone());
    }
    let pos = PROGRESSION
        .iter()
        .position(|step| step == current)
        .ok_or_else(|| DogswatchError::UnrecognizedAction(current.to_string()))?;
    let following = PROGRESSION.get(pos + 1).unwrap_or(&PROGRESSION[pos]);
    Ok(following.clone())
}

/// True when `action` is the absorbing tail of the progression.
pub fn is_final(action: &Action) -> bool {
    matches!(next(action), Ok(ref n) if n == action)
}
