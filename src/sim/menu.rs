//! Menu cursor with wrap-around navigation

/// Index after moving the cursor down one entry
#[inline]
pub fn wrap_next(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index + 1) % count
}

/// Index after moving the cursor up one entry (0 wraps to `count - 1`)
#[inline]
pub fn wrap_prev(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + count - 1) % count
}

/// A fixed, ordered set of selectable menu entries
pub trait MenuItem: Copy + PartialEq + Sized + 'static {
    /// All entries in display order
    const ALL: &'static [Self];

    /// Text shown for this entry
    fn label(self) -> &'static str;

    /// Position of this entry in `ALL`
    fn index(self) -> usize {
        Self::ALL.iter().position(|&item| item == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[wrap_next(self.index(), Self::ALL.len())]
    }

    fn prev(self) -> Self {
        Self::ALL[wrap_prev(self.index(), Self::ALL.len())]
    }
}
