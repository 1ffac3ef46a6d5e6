use arrayvec::ArrayVec;
use rand::{
    Rng,
    seq::{IndexedMutRandom as _, IndexedRandom as _},
};

use super::{
    combo::MAX_MOVES,
    config::{Rules, Tuning},
};
use crate::catalog::{Category, Level, Mode};

/// Builds the combo's shape: an ordered sequence of `len` categories.
///
/// Slots are drawn left to right. The first slot is the opener (punch-led,
/// or kick-led with the tier's configured chance); later slots draw from the
/// tier's weight table with the previous category excluded when it may not
/// repeat, and with the finisher bias applied to the last two slots. A
/// sequence that ends up with no punch slot has one random slot overwritten
/// to punch.
pub(crate) fn build_category_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    level: Level,
    mode: Mode,
    rules: &Rules,
    tuning: &Tuning,
) -> ArrayVec<Category, MAX_MOVES> {
    let weights = tuning.category_weights(level, mode);
    let mut sequence = ArrayVec::new();
    for slot in 0..len {
        let category = if slot == 0 {
            opener(rng, level, mode, tuning)
        } else {
            draw_slot(rng, sequence[slot - 1], slot, len, weights, rules, tuning)
        };
        sequence.push(category);
    }

    // A combo with no punches is not valid output.
    if !sequence.contains(&Category::Punch) {
        if let Some(slot) = sequence.choose_mut(rng) {
            *slot = Category::Punch;
        }
    }

    sequence
}

/// Draws the opening category. Combos open punch-led or kick-led.
fn opener<R: Rng + ?Sized>(rng: &mut R, level: Level, mode: Mode, tuning: &Tuning) -> Category {
    let kick_chance = tuning.first_kick_chance(level).clamp(0.0, 1.0);
    if mode == Mode::Kickboxing && rng.random_bool(kick_chance) {
        Category::Kick
    } else {
        Category::Punch
    }
}

fn draw_slot<R: Rng + ?Sized>(
    rng: &mut R,
    prev: Category,
    slot: usize,
    len: usize,
    weights: [f32; Category::LEN],
    rules: &Rules,
    tuning: &Tuning,
) -> Category {
    let mut pool: ArrayVec<(Category, f32), { Category::LEN }> = Category::ALL
        .into_iter()
        .map(|c| (c, weights[c.as_index()]))
        .filter(|&(_, w)| w > 0.0)
        .collect();

    // Kicks, knees, and defense may not repeat back to back; the stricter
    // rule extends that to every category. Skipped if it would empty the
    // pool (single-category tiers such as beginner boxing).
    if (rules.avoid_same_category_in_a_row || prev.repeat_restricted()) && pool.len() > 1 {
        pool.retain(|&mut (c, _)| c != prev);
    }

    // Finisher bias on the last slot, tapered on the second-to-last.
    let taper = if slot + 1 == len {
        1.0
    } else if slot + 2 == len {
        tuning.finisher_taper
    } else {
        0.0
    };
    if taper > 0.0 {
        for (category, weight) in &mut pool {
            let bias = match category {
                Category::Kick => rules.finisher_bias.kick,
                Category::Knee => rules.finisher_bias.knee,
                _ => 1.0,
            };
            *weight *= (1.0 + (bias - 1.0) * taper).max(0.0);
        }
    }

    match pool.choose_weighted(rng, |&(_, w)| w) {
        Ok(&(category, _)) => category,
        // Every weight zeroed by an extreme bias override; draw uniformly.
        Err(_) => pool.choose(rng).expect("category pool is never empty").0,
    }
}
