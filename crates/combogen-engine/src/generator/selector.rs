use rand::{Rng, seq::IndexedRandom as _};

use super::config::{Rules, Tuning};
use crate::catalog::{Category, Move, Side, Stance};

/// Walks the category sequence and draws one concrete move per slot.
///
/// Candidate narrowing is progressive and never fails: any filter that would
/// empty the candidate set is skipped, falling back first to the slot's
/// category-legal set and ultimately to the entire legal pool.
pub(crate) fn select_moves<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&'static Move],
    sequence: &[Category],
    stance: Stance,
    rules: &Rules,
    tuning: &Tuning,
) -> Vec<&'static str> {
    let mut labels = Vec::with_capacity(sequence.len());
    let mut used: Vec<&'static str> = Vec::with_capacity(sequence.len());
    let mut prev: Option<&'static Move> = None;

    for (slot, &category) in sequence.iter().enumerate() {
        let mut candidates: Vec<&'static Move> = pool
            .iter()
            .copied()
            .filter(|m| m.category() == category)
            .collect();
        if candidates.is_empty() {
            // A category the legal pool cannot serve; widen rather than fail.
            candidates = pool.to_vec();
        }

        if rules.avoid_same_move_in_a_row {
            if let Some(prev) = prev {
                let kept: Vec<_> = candidates
                    .iter()
                    .copied()
                    .filter(|m| m.id() != prev.id())
                    .collect();
                if !kept.is_empty() {
                    candidates = kept;
                }
            }
        }

        // Combos usually open off the lead side.
        if slot == 0
            && matches!(category, Category::Punch | Category::Kick)
            && rng.random_bool(tuning.lead_side_chance.clamp(0.0, 1.0))
        {
            let lead: Vec<_> = candidates
                .iter()
                .copied()
                .filter(|m| m.counts_as_lead(stance))
                .collect();
            if !lead.is_empty() {
                candidates = lead;
            }
        }

        let chosen = match candidates
            .choose_weighted(rng, |m| slot_weight(m, prev, &used, stance, tuning))
        {
            Ok(m) => *m,
            // Every weight zeroed by an extreme penalty override.
            Err(_) => *candidates.choose(rng).expect("candidates are never empty"),
        };

        used.push(chosen.id());
        labels.push(chosen.label());
        prev = Some(chosen);
    }

    labels
}

/// Relative weight of one candidate for the current slot.
///
/// Starts at 1.0 and applies multiplicative adjustments: inside-line leg
/// techniques are boosted, rear-leg techniques and repeats are penalized
/// (down-weighted, not excluded), and a candidate on the same body side as
/// the previous move is penalized to discourage all-left or all-right runs.
fn slot_weight(
    m: &Move,
    prev: Option<&Move>,
    used: &[&str],
    stance: Stance,
    tuning: &Tuning,
) -> f32 {
    let mut weight = 1.0;
    if m.is_inside_line() {
        weight *= tuning.inside_boost;
    }
    if m.is_rear_leg(stance) {
        weight *= tuning.rear_leg_penalty;
    }
    for _ in used.iter().filter(|id| **id == m.id()) {
        weight *= tuning.repeat_penalty;
    }
    if let Some(prev) = prev {
        if m.body_side() != Side::Neutral && m.body_side() == prev.body_side() {
            weight *= tuning.same_side_penalty;
        }
    }
    weight
}
