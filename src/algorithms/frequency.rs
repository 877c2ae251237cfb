use core::fmt;

/// Number of distinct byte values a table tracks.
pub const SYMBOL_COUNT: usize = 256;

/// A byte value together with how often it occurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub byte: u8,
    pub frequency: u64,
}

/// Occurrence counts for every byte value. A count of zero means the byte is absent.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    pub const fn new() -> Self {
        Self { counts: [0; SYMBOL_COUNT] }
    }

    /// Counts every byte of `data` in a single pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        data.iter().for_each(|&byte| table.counts[byte as usize] += 1);
        table
    }

    pub const fn get(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    pub fn set(&mut self, byte: u8, frequency: u64) {
        self.counts[byte as usize] = frequency;
    }

    /// Present symbols, byte value ascending.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &frequency)| frequency != 0)
            .map(|(byte, &frequency)| Symbol {
                byte: byte as u8,
                frequency,
            })
    }

    /// Number of byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&frequency| frequency != 0).count()
    }

    /// Sum of all counts.
    ///
    /// Tables built by [`from_bytes`](Self::from_bytes) or by the header parser never overflow here.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // only the present entries, a full 256-slot dump is unreadable
        f.debug_map()
            .entries(self.symbols().map(|symbol| (symbol.byte, symbol.frequency)))
            .finish()
    }
}
