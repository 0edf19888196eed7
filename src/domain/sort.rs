use clap::ValueEnum;

/// The four orderings offered by the view. Parsed from the command line as
/// `total|rent|safety|expat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Descending by total score
    #[default]
    Total,
    /// Ascending by monthly rent
    Rent,
    /// Descending by safety index
    Safety,
    /// Descending by expat index
    Expat,
}

impl SortKey {
    /// Capitalised form used in badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Rent => "Rent",
            Self::Safety => "Safety",
            Self::Expat => "Expat",
        }
    }
}
