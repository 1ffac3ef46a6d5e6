use std::str::FromStr;

/// Error returned when parsing a taxonomy keyword fails.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("unknown {kind} keyword: {keyword}")]
pub struct ParseKeywordError {
    kind: &'static str,
    keyword: String,
}

impl ParseKeywordError {
    fn new(kind: &'static str, keyword: &str) -> Self {
        Self {
            kind,
            keyword: keyword.to_owned(),
        }
    }
}

/// Technique category.
///
/// The category determines which sequencing rules apply to a slot: kicks,
/// knees, and defense moves may not occupy two consecutive slots, while
/// punches may repeat freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Category {
    #[display("punch")]
    Punch,
    #[display("kick")]
    Kick,
    #[display("knee")]
    Knee,
    #[display("defense")]
    Defense,
}

impl Category {
    /// Number of categories (4).
    pub const LEN: usize = 4;

    /// All categories, in weight-table order.
    pub const ALL: [Category; Category::LEN] = [
        Category::Punch,
        Category::Kick,
        Category::Knee,
        Category::Defense,
    ];

    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }

    /// Whether this category may not occupy two consecutive slots.
    #[must_use]
    pub const fn repeat_restricted(self) -> bool {
        !matches!(self, Category::Punch)
    }

    /// Whether this category is available in the given mode.
    ///
    /// Boxing mode excludes the leg-based categories; the defense entries in
    /// the catalog are all punch-defense and stay available.
    #[must_use]
    pub const fn legal_in(self, mode: Mode) -> bool {
        match mode {
            Mode::Kickboxing => true,
            Mode::Boxing => matches!(self, Category::Punch | Category::Defense),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Punch => "punch",
            Category::Kick => "kick",
            Category::Knee => "knee",
            Category::Defense => "defense",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == keyword)
    }
}

impl FromStr for Category {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_keyword(s).ok_or_else(|| ParseKeywordError::new("category", s))
    }
}

/// Skill tier. Ordered: `Beginner < Intermediate < Advanced`.
///
/// A move with level `L` is only offered to requests at tier `L` or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, derive_more::Display)]
pub enum Level {
    #[display("beginner")]
    Beginner,
    #[display("intermediate")]
    Intermediate,
    #[display("advanced")]
    Advanced,
}

impl Level {
    /// Number of skill tiers (3).
    pub const LEN: usize = 3;

    /// All tiers, lowest first.
    pub const ALL: [Level; Level::LEN] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub(crate) const fn as_index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Level::ALL.into_iter().find(|l| l.as_str() == keyword)
    }
}

impl FromStr for Level {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_keyword(s).ok_or_else(|| ParseKeywordError::new("level", s))
    }
}

/// Fighting stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Stance {
    #[display("orthodox")]
    Orthodox,
    #[display("southpaw")]
    Southpaw,
}

impl Stance {
    /// The side of the body that is forward in this stance.
    #[must_use]
    pub const fn lead_side(self) -> Side {
        match self {
            Stance::Orthodox => Side::Left,
            Stance::Southpaw => Side::Right,
        }
    }

    /// The side of the body that is back in this stance.
    #[must_use]
    pub const fn rear_side(self) -> Side {
        match self {
            Stance::Orthodox => Side::Right,
            Stance::Southpaw => Side::Left,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stance::Orthodox => "orthodox",
            Stance::Southpaw => "southpaw",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Stance::Orthodox, Stance::Southpaw]
            .into_iter()
            .find(|s| s.as_str() == keyword)
    }
}

impl FromStr for Stance {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stance::from_keyword(s).ok_or_else(|| ParseKeywordError::new("stance", s))
    }
}

/// Rule set. Boxing restricts the combo to punches and punch-defense.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Mode {
    #[default]
    #[display("kickboxing")]
    Kickboxing,
    #[display("boxing")]
    Boxing,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Kickboxing => "kickboxing",
            Mode::Boxing => "boxing",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [Mode::Kickboxing, Mode::Boxing]
            .into_iter()
            .find(|m| m.as_str() == keyword)
    }
}

impl FromStr for Mode {
    type Err = ParseKeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_keyword(s).ok_or_else(|| ParseKeywordError::new("mode", s))
    }
}

/// Body side a technique is thrown with.
///
/// `Neutral` covers techniques with no fixed side (the jab and cross, most
/// single defensive reads) and techniques whose side depends on the stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Side {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("neutral")]
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Beginner < Level::Intermediate);
        assert!(Level::Intermediate < Level::Advanced);
    }

    #[test]
    fn test_keyword_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_keyword(category.as_str()), Some(category));
        }
        for level in Level::ALL {
            assert_eq!(Level::from_keyword(level.as_str()), Some(level));
        }
        for stance in [Stance::Orthodox, Stance::Southpaw] {
            assert_eq!(Stance::from_keyword(stance.as_str()), Some(stance));
        }
        for mode in [Mode::Kickboxing, Mode::Boxing] {
            assert_eq!(Mode::from_keyword(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_keywords_fail() {
        assert!("sideways".parse::<Stance>().is_err());
        assert!("expert".parse::<Level>().is_err());
        assert!("elbow".parse::<Category>().is_err());
        assert!("mma".parse::<Mode>().is_err());
    }

    #[test]
    fn test_lead_and_rear_sides() {
        assert_eq!(Stance::Orthodox.lead_side(), Side::Left);
        assert_eq!(Stance::Orthodox.rear_side(), Side::Right);
        assert_eq!(Stance::Southpaw.lead_side(), Side::Right);
        assert_eq!(Stance::Southpaw.rear_side(), Side::Left);
    }

    #[test]
    fn test_repeat_restriction_covers_non_punches() {
        assert!(!Category::Punch.repeat_restricted());
        assert!(Category::Kick.repeat_restricted());
        assert!(Category::Knee.repeat_restricted());
        assert!(Category::Defense.repeat_restricted());
    }

    #[test]
    fn test_boxing_mode_excludes_leg_categories() {
        assert!(Category::Punch.legal_in(Mode::Boxing));
        assert!(Category::Defense.legal_in(Mode::Boxing));
        assert!(!Category::Kick.legal_in(Mode::Boxing));
        assert!(!Category::Knee.legal_in(Mode::Boxing));
        for category in Category::ALL {
            assert!(category.legal_in(Mode::Kickboxing));
        }
    }
}
