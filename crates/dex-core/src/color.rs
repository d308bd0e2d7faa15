//! Type category → card color.

use std::str::FromStr;

/// Color used for unrecognized labels. Same as `normal`.
pub const DEFAULT_COLOR: &str = "#F5F5F5";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Normal,
    Fire,
    Grass,
    Electric,
    Ice,
    Water,
    Ground,
    Rock,
    Fairy,
    Poison,
    Bug,
    Ghost,
    Dragon,
    Psychic,
    Fighting,
}

impl TypeCategory {
    pub const ALL: [TypeCategory; 15] = [
        TypeCategory::Normal,
        TypeCategory::Fire,
        TypeCategory::Grass,
        TypeCategory::Electric,
        TypeCategory::Ice,
        TypeCategory::Water,
        TypeCategory::Ground,
        TypeCategory::Rock,
        TypeCategory::Fairy,
        TypeCategory::Poison,
        TypeCategory::Bug,
        TypeCategory::Ghost,
        TypeCategory::Dragon,
        TypeCategory::Psychic,
        TypeCategory::Fighting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TypeCategory::Normal => "normal",
            TypeCategory::Fire => "fire",
            TypeCategory::Grass => "grass",
            TypeCategory::Electric => "electric",
            TypeCategory::Ice => "ice",
            TypeCategory::Water => "water",
            TypeCategory::Ground => "ground",
            TypeCategory::Rock => "rock",
            TypeCategory::Fairy => "fairy",
            TypeCategory::Poison => "poison",
            TypeCategory::Bug => "bug",
            TypeCategory::Ghost => "ghost",
            TypeCategory::Dragon => "dragon",
            TypeCategory::Psychic => "psychic",
            TypeCategory::Fighting => "fighting",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TypeCategory::Normal => DEFAULT_COLOR,
            TypeCategory::Fire => "#FDDFDF",
            TypeCategory::Grass => "#DEFDE0",
            TypeCategory::Electric => "#FCF7DE",
            TypeCategory::Ice | TypeCategory::Water => "#DEF3FD",
            TypeCategory::Ground => "#F4E7DA",
            TypeCategory::Rock => "#D5D5D4",
            TypeCategory::Fairy => "#FCEAFF",
            TypeCategory::Poison => "#98D7A5",
            TypeCategory::Bug => "#F8D5A3",
            TypeCategory::Ghost => "#CAC0F7",
            TypeCategory::Dragon => "#97B3E6",
            TypeCategory::Psychic => "#EAEDA1",
            TypeCategory::Fighting => "#E6E0D4",
        }
    }
}

impl FromStr for TypeCategory {
    type Err = ();

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        TypeCategory::ALL
            .into_iter()
            .find(|category| category.label() == label)
            .ok_or(())
    }
}

/// Color for a type label, falling back to [`DEFAULT_COLOR`].
pub fn type_color(label: &str) -> &'static str {
    label
        .parse::<TypeCategory>()
        .map(TypeCategory::color)
        .unwrap_or(DEFAULT_COLOR)
}
