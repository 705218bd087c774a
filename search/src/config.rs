#[derive(Debug, Clone, Copy, Default)]
pub enum CaseMatching {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum fraction of the best score a result must retain to be kept.
    /// Must lie in `(0, 1]`.
    pub good_match_ratio: f64,
    pub case_matching: CaseMatching,
    pub unicode_normalization: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            good_match_ratio: 0.65,
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}
