//! Per-entry fill colours keyed by pretty name.

use std::collections::HashMap;

/// Fill palette: six base colours, then Pastel1 and Pastel2.
pub const PALETTE: [&str; 23] = [
    "#1395ba", "#c02e1d", "#f16c20", "#ebc844", "#a2b86c", "#0d3c55",
    // Pastel1
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
    // Pastel2
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc",
];

/// Pretty name → palette slot, first come first served.
///
/// The counter wraps, so once more than `PALETTE.len()` names have been seen
/// distinct names start sharing colours.
#[derive(Debug, Clone, Default)]
pub struct ColorAssignment {
    slots: HashMap<String, usize>,
    next: usize,
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour for `pretty`, assigning the next slot on first encounter.
    pub fn pick(&mut self, pretty: &str) -> &'static str {
        if let Some(idx) = self.slots.get(pretty) {
            return PALETTE[*idx];
        }

        let idx = self.next;
        self.slots.insert(pretty.to_string(), idx);
        self.next = (self.next + 1) % PALETTE.len();
        PALETTE[idx]
    }

    /// Colour already assigned to `pretty`, without assigning one.
    pub fn get(&self, pretty: &str) -> Option<&'static str> {
        self.slots.get(pretty).map(|idx| PALETTE[*idx])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
