use rand::Rng;

use super::{
    config::{Rules, Tuning},
    selector::select_moves,
    sequencer::build_category_sequence,
};
use crate::catalog::{Level, Mode, Move, MoveCatalog, Stance};

/// Smallest supported combo length. Shorter requests are clamped up.
pub const MIN_MOVES: usize = 3;

/// Largest supported combo length. Longer requests are clamped down.
pub const MAX_MOVES: usize = 8;

/// The caller-supplied parameter record for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboRequest {
    /// Desired move count; clamped to [`MIN_MOVES`]..=[`MAX_MOVES`].
    pub count: usize,
    pub stance: Stance,
    pub level: Level,
    pub mode: Mode,
    pub rules: Rules,
    pub tuning: Tuning,
}

impl ComboRequest {
    /// A request with the default mode (kickboxing), rules, and tuning.
    #[must_use]
    pub const fn new(count: usize, stance: Stance, level: Level) -> Self {
        Self {
            count,
            stance,
            level,
            mode: Mode::Kickboxing,
            rules: Rules::DEFAULT,
            tuning: Tuning::DEFAULT,
        }
    }
}

/// Clamps a requested move count into the supported range.
#[must_use]
pub const fn clamp_count(count: usize) -> usize {
    if count < MIN_MOVES {
        MIN_MOVES
    } else if count > MAX_MOVES {
        MAX_MOVES
    } else {
        count
    }
}

/// Generates one combo: an ordered list of display labels.
///
/// The result always has exactly `clamp_count(request.count)` entries; the
/// generator is total and defines no error conditions for legal inputs.
/// Each call is independent and recomputes all per-slot state, so identical
/// requests with independently seeded random sources are fully independent.
///
/// # Example
///
/// ```
/// use combogen_engine::{ComboRequest, ComboSeed, Level, MoveCatalog, Stance, generate_combo};
///
/// let request = ComboRequest::new(5, Stance::Southpaw, Level::Intermediate);
/// let seed: ComboSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut seed.rng());
/// assert_eq!(combo.len(), 5);
/// // Same seed, same combo.
/// assert_eq!(
///     combo,
///     generate_combo(&MoveCatalog::STANDARD, &request, &mut seed.rng())
/// );
/// ```
pub fn generate_combo<R: Rng + ?Sized>(
    catalog: &MoveCatalog,
    request: &ComboRequest,
    rng: &mut R,
) -> Vec<&'static str> {
    let pool: Vec<&'static Move> = catalog
        .legal_moves(request.level, request.mode, request.stance)
        .collect();
    let len = clamp_count(request.count);
    let sequence =
        build_category_sequence(rng, len, request.level, request.mode, &request.rules, &request.tuning);
    select_moves(rng, &pool, &sequence, request.stance, &request.rules, &request.tuning)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::catalog::Category;

    const TRIALS: u64 = 300;

    /// Whether some catalog entry with this label is legal for the request.
    ///
    /// Labels are not unique, so a returned label is valid as long as at
    /// least one entry carrying it passes every legality gate.
    fn has_legal_entry(label: &str, request: &ComboRequest) -> bool {
        MoveCatalog::STANDARD
            .legal_moves(request.level, request.mode, request.stance)
            .any(|m| m.label() == label)
    }

    /// Category of a label. Entries sharing a label share a category.
    fn label_category(label: &str) -> Category {
        MoveCatalog::STANDARD
            .moves()
            .iter()
            .find(|m| m.label() == label)
            .unwrap_or_else(|| panic!("label not in catalog: {label}"))
            .category()
    }

    fn all_requests() -> Vec<ComboRequest> {
        let mut requests = vec![];
        for level in Level::ALL {
            for stance in [Stance::Orthodox, Stance::Southpaw] {
                for mode in [Mode::Kickboxing, Mode::Boxing] {
                    for count in [3, 5, 8] {
                        let mut request = ComboRequest::new(count, stance, level);
                        request.mode = mode;
                        requests.push(request);
                    }
                }
            }
        }
        requests
    }

    #[test]
    fn test_length_matches_clamped_count() {
        for request in all_requests() {
            for trial in 0..TRIALS {
                let mut rng = Pcg32::seed_from_u64(trial);
                let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rng);
                assert_eq!(combo.len(), clamp_count(request.count));
            }
        }
    }

    #[test]
    fn test_out_of_range_counts_are_clamped() {
        let mut rng = Pcg32::seed_from_u64(0);
        for (count, expected) in [(0, 3), (1, 3), (2, 3), (3, 3), (8, 8), (9, 8), (100, 8)] {
            let request = ComboRequest::new(count, Stance::Orthodox, Level::Beginner);
            let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rng);
            assert_eq!(combo.len(), expected, "count {count}");
        }
    }

    #[test]
    fn test_every_label_is_legal_for_its_request() {
        // Covers level gating, mode gating, stance restrictions, and the
        // inside-line lead-leg rule in one sweep.
        for request in all_requests() {
            for trial in 0..TRIALS {
                let mut rng = Pcg32::seed_from_u64(trial);
                for label in generate_combo(&MoveCatalog::STANDARD, &request, &mut rng) {
                    assert!(has_legal_entry(label, &request), "{label} in {request:?}");
                }
            }
        }
    }

    #[test]
    fn test_every_combo_contains_a_punch() {
        for request in all_requests() {
            for trial in 0..TRIALS {
                let mut rng = Pcg32::seed_from_u64(trial);
                let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rng);
                assert!(
                    combo.iter().any(|label| label_category(label) == Category::Punch),
                    "{combo:?}"
                );
            }
        }
    }

    #[test]
    fn test_no_restricted_category_repeats() {
        for request in all_requests() {
            for trial in 0..TRIALS {
                let mut rng = Pcg32::seed_from_u64(trial);
                let combo = generate_combo(&MoveCatalog::STANDARD, &request, &mut rng);
                for pair in combo.windows(2) {
                    let (a, b) = (label_category(pair[0]), label_category(pair[1]));
                    assert!(!(a == b && a.repeat_restricted()), "{combo:?}");
                }
            }
        }
    }

    #[test]
    fn test_boxing_combo_has_no_leg_labels() {
        let mut request = ComboRequest::new(8, Stance::Orthodox, Level::Advanced);
        request.mode = Mode::Boxing;
        for trial in 0..TRIALS {
            let mut rng = Pcg32::seed_from_u64(trial);
            for label in generate_combo(&MoveCatalog::STANDARD, &request, &mut rng) {
                assert!(matches!(
                    label_category(label),
                    Category::Punch | Category::Defense
                ));
            }
        }
    }

    #[test]
    fn test_beginner_combo_uses_beginner_moves_only() {
        let request = ComboRequest::new(4, Stance::Orthodox, Level::Beginner);
        for trial in 0..TRIALS {
            let mut rng = Pcg32::seed_from_u64(trial);
            for label in generate_combo(&MoveCatalog::STANDARD, &request, &mut rng) {
                let unlocked = MoveCatalog::STANDARD
                    .moves()
                    .iter()
                    .filter(|m| m.label() == label)
                    .any(|m| m.level() == Level::Beginner);
                assert!(unlocked, "{label} is not a beginner move");
            }
        }
    }

    #[test]
    fn test_same_seed_same_combo() {
        for request in all_requests() {
            let seed = crate::ComboSeed::random();
            let a = generate_combo(&MoveCatalog::STANDARD, &request, &mut seed.rng());
            let b = generate_combo(&MoveCatalog::STANDARD, &request, &mut seed.rng());
            assert_eq!(a, b);
        }
    }
}
