//! The gold products tracked by the bot.

/// One of the four tracked gold products.
///
/// Variants are declared in message order, so `Ord` and [`Instrument::ALL`]
/// both follow gram, quarter, full, ata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instrument {
    /// Gram gold.
    Gram,
    /// Quarter coin (çeyrek).
    Quarter,
    /// Full coin (tam).
    Full,
    /// Ata coin.
    Ata,
}

impl Instrument {
    /// All instruments in message order.
    pub const ALL: [Self; 4] = [Self::Gram, Self::Quarter, Self::Full, Self::Ata];

    /// Key used by the Truncgil feed for this instrument.
    #[must_use]
    pub const fn source_key(self) -> &'static str {
        match self {
            Self::Gram => "GRA",
            Self::Quarter => "CEYREKALTIN",
            Self::Full => "TAMALTIN",
            Self::Ata => "ATAALTIN",
        }
    }

    /// Label shown in the published message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gram => "Gram",
            Self::Quarter => "Çeyrek",
            Self::Full => "Tam",
            Self::Ata => "Ata",
        }
    }

    /// Leading glyph of the instrument's line.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Gram => "🪙",
            Self::Quarter => "🥇",
            Self::Full => "🏅",
            Self::Ata => "👑",
        }
    }
}
