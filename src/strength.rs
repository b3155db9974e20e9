//! Heuristic password scoring and the strength bar it drives.
//!
//! The score adds one point per length bucket (8, 12 and 16 characters) and
//! one point for each class of character present, so it ranges over `0..=7`.

/// Highest value [`score`] can return.
pub const MAX_SCORE: u8 = 7;

const LENGTH_BUCKETS: [usize; 3] = [8, 12, 16];

pub fn score(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut score = LENGTH_BUCKETS.iter().filter(|b| length >= **b).count() as u8;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const RED: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);
pub const ORANGE: Rgb = Rgb::new(0xf3, 0x9c, 0x12);
pub const GREEN: Rgb = Rgb::new(0x27, 0xae, 0x60);
pub const TRACK_GRAY: Rgb = Rgb::new(0xdd, 0xdd, 0xdd);
pub const MUTED_GRAY: Rgb = Rgb::new(0x66, 0x66, 0x66);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3..=4 => StrengthTier::Medium,
            _ => StrengthTier::Strong,
        }
    }

    pub fn fill_percent(self) -> u16 {
        match self {
            StrengthTier::Weak => 30,
            StrengthTier::Medium => 60,
            StrengthTier::Strong => 100,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            StrengthTier::Weak => RED,
            StrengthTier::Medium => ORANGE,
            StrengthTier::Strong => GREEN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }
}

/// What the strength bar shows. `tier` is `None` while no password is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthMeter {
    pub tier: Option<StrengthTier>,
    pub fill_percent: u16,
    pub fill_color: Rgb,
    pub label: String,
    pub label_color: Rgb,
}

impl StrengthMeter {
    pub fn unset() -> Self {
        Self {
            tier: None,
            fill_percent: 0,
            fill_color: TRACK_GRAY,
            label: "Strength: not set".to_string(),
            label_color: MUTED_GRAY,
        }
    }

    pub fn for_password(password: &str) -> Self {
        if password.is_empty() {
            return Self::unset();
        }
        let tier = StrengthTier::from_score(score(password));
        Self {
            tier: Some(tier),
            fill_percent: tier.fill_percent(),
            fill_color: tier.color(),
            label: format!("Strength: {}", tier.label()),
            label_color: tier.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_examples() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abc"), 1);
        assert_eq!(score("abcdefghij"), 2);
        assert_eq!(score("Abcdefgh1234"), 5);
        assert_eq!(score("Abcdefgh1234!@#$"), 7);
    }

    #[test]
    fn test_score_is_deterministic() {
        let password = "x9!Qz#4mPp_2";
        assert_eq!(score(password), score(password));
    }

    #[test]
    fn test_score_never_exceeds_max() {
        let password = "aA1!".repeat(20);
        assert_eq!(score(&password), MAX_SCORE);
    }

    #[test]
    fn test_score_non_decreasing_in_length() {
        let mut previous = 0;
        for length in 1..=40 {
            let password = "a".repeat(length);
            let current = score(&password);
            assert!(current >= previous, "score dropped at length {}", length);
            previous = current;
        }
        assert_eq!(score(&"a".repeat(7)), 1);
        assert_eq!(score(&"a".repeat(8)), 2);
        assert_eq!(score(&"a".repeat(12)), 3);
        assert_eq!(score(&"a".repeat(16)), 4);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // four two-byte characters
        assert_eq!(score("éééé"), 1);
    }

    #[test]
    fn test_tier_partition() {
        let tiers: Vec<StrengthTier> = (0..=MAX_SCORE).map(StrengthTier::from_score).collect();
        assert_eq!(
            tiers,
            vec![
                StrengthTier::Weak,
                StrengthTier::Weak,
                StrengthTier::Weak,
                StrengthTier::Medium,
                StrengthTier::Medium,
                StrengthTier::Strong,
                StrengthTier::Strong,
                StrengthTier::Strong,
            ]
        );
    }

    #[test]
    fn test_meter_for_lowercase_password_is_weak() {
        let meter = StrengthMeter::for_password("qwertyuiop");
        assert_eq!(meter.tier, Some(StrengthTier::Weak));
        assert_eq!(meter.fill_percent, 30);
        assert_eq!(meter.fill_color, RED);
        assert_eq!(meter.label, "Strength: Weak");
    }

    #[test]
    fn test_meter_for_strong_password() {
        let meter = StrengthMeter::for_password("Abcdefgh1234!@#$");
        assert_eq!(meter.tier, Some(StrengthTier::Strong));
        assert_eq!(meter.fill_percent, 100);
        assert_eq!(meter.label_color, GREEN);
    }

    #[test]
    fn test_empty_password_is_unset_not_weak() {
        let meter = StrengthMeter::for_password("");
        assert_eq!(meter, StrengthMeter::unset());
        assert_eq!(meter.tier, None);
        assert_eq!(meter.fill_percent, 0);
    }
}
