//! Unit lookup strategies
//!
//! A lookup tries an ordered list of strategies and returns the first hit.

/// One way of matching a name against the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupStrategy {
    /// The bare name, exactly as registered
    Exact,
    /// "alias:NAME" or "Schema:NAME" naming this registry
    Qualified,
    /// Bare or qualified name, ignoring ASCII case
    CaseInsensitive,
}

impl LookupStrategy {
    /// Exact then qualified
    pub const DEFAULT: &'static [LookupStrategy] = &[LookupStrategy::Exact, LookupStrategy::Qualified];

    /// Exact, qualified, then case-insensitive
    pub const WITH_CASE_FALLBACK: &'static [LookupStrategy] = &[
        LookupStrategy::Exact,
        LookupStrategy::Qualified,
        LookupStrategy::CaseInsensitive,
    ];
}

/// Per-call lookup options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub case_insensitive: bool,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_insensitive() -> Self {
        Self { case_insensitive: true }
    }

    /// Strategies to try, in order
    pub fn strategies(&self) -> &'static [LookupStrategy] {
        if self.case_insensitive {
            LookupStrategy::WITH_CASE_FALLBACK
        } else {
            LookupStrategy::DEFAULT
        }
    }
}
