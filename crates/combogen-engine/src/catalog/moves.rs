use super::taxonomy::{Category, Level, Mode, Side, Stance};

/// A single catalog entry: one named technique.
///
/// Entries are immutable static configuration. Identifiers are unique within
/// a catalog and are used for repetition tracking; labels are display text
/// and need not be unique (the two inside-low-kick variants share a label on
/// purpose, differing only in which leg is legal under which stance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    id: &'static str,
    label: &'static str,
    category: Category,
    level: Level,
    stance: Option<Stance>,
    side: Side,
    inside: bool,
}

impl Move {
    const fn new(id: &'static str, label: &'static str, category: Category, level: Level) -> Self {
        Self {
            id,
            label,
            category,
            level,
            stance: None,
            side: Side::Neutral,
            inside: false,
        }
    }

    const fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    const fn stance(mut self, stance: Stance) -> Self {
        self.stance = Some(stance);
        self
    }

    /// Marks an inside-line leg technique, legal only off the lead leg.
    const fn inside_line(mut self) -> Self {
        self.inside = true;
        self
    }

    /// Stable unique identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Minimum skill tier that unlocks this move.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Stance restriction, if any. `None` means legal under either stance.
    #[must_use]
    pub const fn stance_restriction(&self) -> Option<Stance> {
        self.stance
    }

    /// Body side the technique is thrown with.
    #[must_use]
    pub const fn body_side(&self) -> Side {
        self.side
    }

    /// Whether this is an inside-line leg technique.
    #[must_use]
    pub const fn is_inside_line(&self) -> bool {
        self.inside
    }

    /// Whether this move is thrown from the lead side of the given stance.
    ///
    /// The jab counts as lead-side under either stance; it is thrown with
    /// whichever hand is forward, which no static side value can express.
    #[must_use]
    pub fn counts_as_lead(&self, stance: Stance) -> bool {
        self.side == stance.lead_side() || self.id == "jab"
    }

    /// Whether this is a leg technique thrown off the rear leg of the stance.
    #[must_use]
    pub fn is_rear_leg(&self, stance: Stance) -> bool {
        matches!(self.category, Category::Kick | Category::Knee) && self.side == stance.rear_side()
    }
}

/// The built-in technique catalog.
const STANDARD_MOVES: &[Move] = {
    use Category::{Defense, Kick, Knee, Punch};
    use Level::{Advanced, Beginner, Intermediate};
    use Side::{Left, Right};
    use Stance::{Orthodox, Southpaw};

    &[
        // Punches
        Move::new("jab", "Jab", Punch, Beginner),
        Move::new("cross", "Cross", Punch, Beginner),
        Move::new("l_hook", "Left hook", Punch, Beginner).side(Left),
        Move::new("r_hook", "Right hook", Punch, Beginner).side(Right),
        Move::new("l_upper", "Left uppercut", Punch, Intermediate).side(Left),
        Move::new("r_upper", "Right uppercut", Punch, Intermediate).side(Right),
        Move::new("body_cross", "Cross to the body", Punch, Intermediate),
        Move::new("l_body", "Left hook to the body", Punch, Intermediate).side(Left),
        Move::new("r_body", "Right hook to the body", Punch, Intermediate).side(Right),
        Move::new("overhand", "Overhand", Punch, Advanced).side(Right),
        // Kicks
        Move::new("l_low", "Left low kick", Kick, Beginner).side(Left),
        Move::new("r_low", "Right low kick", Kick, Beginner).side(Right),
        Move::new("l_mid", "Left middle kick", Kick, Beginner).side(Left),
        Move::new("r_mid", "Right middle kick", Kick, Beginner).side(Right),
        Move::new("l_in_low", "Inside low kick", Kick, Intermediate)
            .side(Left)
            .inside_line(),
        Move::new("r_in_low", "Inside low kick", Kick, Intermediate)
            .side(Right)
            .inside_line(),
        Move::new("l_teep", "Left teep", Kick, Intermediate).side(Left),
        Move::new("r_teep", "Right teep", Kick, Intermediate).side(Right),
        Move::new("l_high", "Left high kick", Kick, Advanced).side(Left),
        Move::new("r_high", "Right high kick", Kick, Advanced).side(Right),
        Move::new("spin_back", "Spinning back kick", Kick, Advanced),
        // Knees
        Move::new("l_knee", "Left knee", Knee, Intermediate).side(Left),
        Move::new("r_knee", "Right knee", Knee, Intermediate).side(Right),
        Move::new("jump_knee", "Jumping knee", Knee, Advanced),
        // Defense
        Move::new("parry_jab", "Parry the jab", Defense, Intermediate),
        Move::new("parry_cross", "Parry the cross", Defense, Intermediate),
        Move::new("stepback_one_two", "Step back from the one-two", Defense, Intermediate),
        Move::new("sway_cross", "Sway back, return the cross", Defense, Intermediate),
        // Defense with a counter; mirrored per stance
        Move::new("weave_l_hook_o", "Weave the left hook, counter cross", Defense, Intermediate)
            .stance(Orthodox),
        Move::new("weave_r_hook_s", "Weave the right hook, counter cross", Defense, Intermediate)
            .stance(Southpaw),
        Move::new("slip_cross_body_o", "Slip the cross, left hook to the body", Defense, Intermediate)
            .stance(Orthodox)
            .side(Left),
        Move::new("slip_cross_body_s", "Slip the cross, right hook to the body", Defense, Intermediate)
            .stance(Southpaw)
            .side(Right),
        Move::new("block_body_hook_o", "Block the body shot, answer with the right hook", Defense, Intermediate)
            .stance(Orthodox)
            .side(Right),
        Move::new("block_body_hook_s", "Block the body shot, answer with the left hook", Defense, Intermediate)
            .stance(Southpaw)
            .side(Left),
        Move::new("pull_counter_o", "Pull counter off the jab", Defense, Advanced).stance(Orthodox),
        Move::new("pull_counter_s", "Pull counter off the jab", Defense, Advanced).stance(Southpaw),
        Move::new("roll_hook", "Roll under the hook, pivot out", Defense, Advanced),
    ]
};

/// The immutable technique catalog plus the legality filter.
///
/// A catalog is constructed once and shared read-only; no entry changes at
/// runtime. [`MoveCatalog::STANDARD`] is the built-in catalog; a custom one
/// can be supplied with [`MoveCatalog::new`].
#[derive(Debug, Clone, Copy)]
pub struct MoveCatalog {
    moves: &'static [Move],
}

impl MoveCatalog {
    /// The built-in catalog.
    pub const STANDARD: Self = Self::new(STANDARD_MOVES);

    #[must_use]
    pub const fn new(moves: &'static [Move]) -> Self {
        Self { moves }
    }

    /// Every entry, in catalog order.
    #[must_use]
    pub const fn moves(&self) -> &'static [Move] {
        self.moves
    }

    /// Returns every entry legal for the given request parameters.
    ///
    /// An entry is legal when its level does not exceed `level`, its category
    /// is available in `mode`, its stance restriction (if any) matches
    /// `stance`, and - for inside-line leg techniques - it is thrown with
    /// the leg that is forward in `stance`.
    pub fn legal_moves(
        &self,
        level: Level,
        mode: Mode,
        stance: Stance,
    ) -> impl Iterator<Item = &'static Move> {
        self.moves.iter().filter(move |m| {
            m.level <= level
                && m.category.legal_in(mode)
                && m.stance.is_none_or(|s| s == stance)
                && (!m.inside || m.side == stance.lead_side())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn legal(level: Level, mode: Mode, stance: Stance) -> Vec<&'static Move> {
        MoveCatalog::STANDARD.legal_moves(level, mode, stance).collect()
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for m in MoveCatalog::STANDARD.moves() {
            assert!(seen.insert(m.id()), "duplicate id: {}", m.id());
        }
    }

    #[test]
    fn test_shared_labels_share_category_and_level() {
        // Duplicate labels are allowed, but only as stance-mirrored variants
        // of the same technique.
        let moves = MoveCatalog::STANDARD.moves();
        for a in moves {
            for b in moves {
                if a.id() != b.id() && a.label() == b.label() {
                    assert_eq!(a.category(), b.category());
                    assert_eq!(a.level(), b.level());
                }
            }
        }
    }

    #[test]
    fn test_level_gate_is_monotone() {
        for stance in [Stance::Orthodox, Stance::Southpaw] {
            for mode in [Mode::Kickboxing, Mode::Boxing] {
                let beginner = legal(Level::Beginner, mode, stance).len();
                let intermediate = legal(Level::Intermediate, mode, stance).len();
                let advanced = legal(Level::Advanced, mode, stance).len();
                assert!(beginner <= intermediate);
                assert!(intermediate <= advanced);
            }
        }
    }

    #[test]
    fn test_level_gate_excludes_higher_tiers() {
        for m in legal(Level::Beginner, Mode::Kickboxing, Stance::Orthodox) {
            assert_eq!(m.level(), Level::Beginner);
        }
        for m in legal(Level::Intermediate, Mode::Kickboxing, Stance::Southpaw) {
            assert!(m.level() <= Level::Intermediate);
        }
    }

    #[test]
    fn test_boxing_mode_has_no_leg_moves() {
        for level in Level::ALL {
            for stance in [Stance::Orthodox, Stance::Southpaw] {
                for m in legal(level, Mode::Boxing, stance) {
                    assert!(matches!(m.category(), Category::Punch | Category::Defense));
                }
            }
        }
    }

    #[test]
    fn test_stance_restriction_is_honored() {
        for m in legal(Level::Advanced, Mode::Kickboxing, Stance::Orthodox) {
            assert_ne!(m.stance_restriction(), Some(Stance::Southpaw));
        }
        for m in legal(Level::Advanced, Mode::Kickboxing, Stance::Southpaw) {
            assert_ne!(m.stance_restriction(), Some(Stance::Orthodox));
        }
    }

    #[test]
    fn test_inside_line_requires_lead_leg() {
        let orthodox = legal(Level::Advanced, Mode::Kickboxing, Stance::Orthodox);
        assert!(orthodox.iter().any(|m| m.id() == "l_in_low"));
        assert!(!orthodox.iter().any(|m| m.id() == "r_in_low"));

        let southpaw = legal(Level::Advanced, Mode::Kickboxing, Stance::Southpaw);
        assert!(southpaw.iter().any(|m| m.id() == "r_in_low"));
        assert!(!southpaw.iter().any(|m| m.id() == "l_in_low"));
    }

    #[test]
    fn test_every_request_has_punches() {
        // The sequencer's punch guarantee relies on this.
        for level in Level::ALL {
            for mode in [Mode::Kickboxing, Mode::Boxing] {
                for stance in [Stance::Orthodox, Stance::Southpaw] {
                    assert!(
                        legal(level, mode, stance)
                            .iter()
                            .any(|m| m.category() == Category::Punch)
                    );
                }
            }
        }
    }

    #[test]
    fn test_jab_counts_as_lead_from_either_stance() {
        let jab = MoveCatalog::STANDARD
            .moves()
            .iter()
            .find(|m| m.id() == "jab")
            .unwrap();
        assert!(jab.counts_as_lead(Stance::Orthodox));
        assert!(jab.counts_as_lead(Stance::Southpaw));
    }

    #[test]
    fn test_rear_leg_detection_follows_stance() {
        let r_low = MoveCatalog::STANDARD
            .moves()
            .iter()
            .find(|m| m.id() == "r_low")
            .unwrap();
        assert!(r_low.is_rear_leg(Stance::Orthodox));
        assert!(!r_low.is_rear_leg(Stance::Southpaw));

        // Punches are never rear-leg techniques.
        let r_hook = MoveCatalog::STANDARD
            .moves()
            .iter()
            .find(|m| m.id() == "r_hook")
            .unwrap();
        assert!(!r_hook.is_rear_leg(Stance::Orthodox));
    }
}
