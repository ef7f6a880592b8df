use super::Entry;

/// Default entry used to populate a playlist that has no snapshot yet
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub title: &'static str,
    pub link: &'static str,
    pub like_count: u64,
    pub is_favorite: bool,
}

/// Seed set, in insertion order
pub const SEED: [SeedEntry; 3] = [
    SeedEntry {
        title: "The Weeknd - Blinding Lights",
        link: "https://www.youtube.com/watch?v=4NRXx6U8ABQ",
        like_count: 42,
        is_favorite: true,
    },
    SeedEntry {
        title: "Ed Sheeran - Shape of You",
        link: "https://www.youtube.com/watch?v=JGwWNGJdvx8",
        like_count: 28,
        is_favorite: false,
    },
    SeedEntry {
        title: "Dua Lipa - Levitating",
        link: "https://www.youtube.com/watch?v=TUVcZfQe-Kw",
        like_count: 15,
        is_favorite: true,
    },
];

/// Build the seed entries with ids 1, 2, 3
pub fn seed_entries() -> Vec<Entry> {
    (1u64..)
        .zip(SEED.iter())
        .map(|(id, seed)| {
            Entry::with_stats(id, seed.title, seed.link, seed.like_count, seed.is_favorite)
        })
        .collect()
}
