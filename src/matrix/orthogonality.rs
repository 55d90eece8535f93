use std::sync::OnceLock;

/// Whether a matrix is known to be orthogonal.
///
/// `Unknown` means the classification has not been resolved yet; it is never
/// a statement about the matrix itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orthogonality {
    Unknown,
    Orthogonal,
    NotOrthogonal,
}

impl Orthogonality {
    /// Classification of `a * b` derived from its operands alone.
    ///
    /// Two orthogonal factors give an orthogonal product, and an orthogonal factor
    /// times a non-orthogonal one is non-orthogonal. Every other combination stays
    /// `Unknown`; two non-orthogonal factors can still multiply out to an
    /// orthogonal matrix.
    pub const fn of_product(a: Orthogonality, b: Orthogonality) -> Orthogonality {
        use Orthogonality::*;
        match (a, b) {
            (Orthogonal, Orthogonal) => Orthogonal,
            (Orthogonal, NotOrthogonal) | (NotOrthogonal, Orthogonal) => NotOrthogonal,
            _ => Unknown,
        }
    }
}

impl From<bool> for Orthogonality {
    fn from(orthogonal: bool) -> Self {
        if orthogonal {
            Orthogonality::Orthogonal
        } else {
            Orthogonality::NotOrthogonal
        }
    }
}

/// Memoized orthogonality of one matrix instance.
///
/// Resolved at most once; concurrent first reads may compute the check
/// redundantly but always agree on the result.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrthogonalityCache(OnceLock<bool>);

impl OrthogonalityCache {
    pub(crate) fn state(&self) -> Orthogonality {
        match self.0.get() {
            Some(&known) => known.into(),
            None => Orthogonality::Unknown,
        }
    }

    pub(crate) fn resolve(&self, check: impl FnOnce() -> bool) -> bool {
        *self.0.get_or_init(check)
    }
}

impl From<Orthogonality> for OrthogonalityCache {
    fn from(state: Orthogonality) -> Self {
        match state {
            Orthogonality::Unknown => OrthogonalityCache(OnceLock::new()),
            Orthogonality::Orthogonal => OrthogonalityCache(OnceLock::from(true)),
            Orthogonality::NotOrthogonal => OrthogonalityCache(OnceLock::from(false)),
        }
    }
}
