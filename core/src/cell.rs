use serde::{Deserialize, Serialize};

/// Ground truth of a single cell in the mine layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Clear,
    Mine,
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Glyph used when rendering the mine layout for debugging.
    pub const fn glyph(self) -> char {
        match self {
            Self::Clear => ' ',
            Self::Mine => '*',
        }
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Hidden,
    /// Clear cell with the number of adjacent mines.
    Revealed(u8),
    /// Only shown once the game is lost.
    Mine,
}

impl VisibleCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Hidden => '?',
            Self::Mine => '*',
            Self::Revealed(0) => ' ',
            Self::Revealed(count) => (b'0' + count) as char,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(VisibleCell::Hidden.glyph(), '?');
        assert_eq!(VisibleCell::Mine.glyph(), '*');
        assert_eq!(VisibleCell::Revealed(0).glyph(), ' ');
        assert_eq!(VisibleCell::Revealed(3).glyph(), '3');
        assert_eq!(VisibleCell::Revealed(8).glyph(), '8');
        assert_eq!(CellKind::Mine.glyph(), '*');
    }
}
