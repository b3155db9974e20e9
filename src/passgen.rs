use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Alphabet concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Numbers => "Numbers (0-9)",
            CharacterClass::Symbols => "Symbols (!@#$)",
        }
    }
}

/// Which character classes the user has switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl CharacterClassSelection {
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let flag = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn has_valid_options(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }

    fn get_charset(&self) -> Vec<char> {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

/// Bounds of the length slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: Self::MIN_LENGTH,
            max: Self::MAX_LENGTH,
        }
    }
}

impl LengthRange {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 32;
    pub const DEFAULT_LENGTH: usize = 16;

    pub fn clamp(&self, length: usize) -> usize {
        length.clamp(self.min, self.max)
    }

}

/// A length within [`LengthRange`] plus the non-empty alphabet to sample from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    alphabet: Vec<char>,
}

impl GenerationRequest {
    pub fn new(selection: &CharacterClassSelection, length: usize) -> Result<Self> {
        let alphabet = selection.get_charset();
        if alphabet.is_empty() {
            return Err(WidgetError::NoCharacterClassSelected);
        }
        Ok(Self {
            length: LengthRange::default().clamp(length),
            alphabet,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Draws `length` characters independently and uniformly from the alphabet.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedPassword {
        let password: String = (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..self.alphabet.len());
                self.alphabet[idx]
            })
            .collect();

        GeneratedPassword(password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn generate_password<R: Rng + ?Sized>(
    selection: &CharacterClassSelection,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    let request = GenerationRequest::new(selection, length)?;
    Ok(request.sample(rng))
}
