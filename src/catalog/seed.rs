//! Built-in seed collections.
//!
//! The store is (re)initialised from one of these at startup; nothing is
//! persisted between runs.

use super::models::{AiringStatus, CatalogEntry, EntryId, UpdateDay};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSet {
    /// The ten titles of the discovery app, with rankings and update days.
    #[default]
    Discovery,
    /// The four titles of the admin manager, with ratings and episode counts.
    Admin,
    /// Start with an empty catalog.
    Empty,
}

impl SeedSet {
    pub fn entries(&self) -> Vec<CatalogEntry> {
        match self {
            SeedSet::Discovery => discovery_seed(),
            SeedSet::Admin => admin_seed(),
            SeedSet::Empty => vec![],
        }
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn discovery_entry(
    id: u64,
    title: &str,
    description: &str,
    genres: &[&str],
    studio: &str,
    premiere: (i32, u32, u32),
    format: &str,
    popularity_rank: u32,
    last_update: (i32, u32, u32),
    update_day: UpdateDay,
    image: &str,
) -> CatalogEntry {
    CatalogEntry {
        id: EntryId(id),
        title: title.to_string(),
        alternative_title: None,
        description: description.to_string(),
        genres: tags(genres),
        popularity_rank: Some(popularity_rank),
        last_update: NaiveDate::from_ymd_opt(last_update.0, last_update.1, last_update.2),
        update_day: Some(update_day),
        rating: None,
        episode_count: None,
        year: Some(premiere.0 as u16),
        studio: Some(studio.to_string()),
        status: None,
        format: Some(format.to_string()),
        premiere: NaiveDate::from_ymd_opt(premiere.0, premiere.1, premiere.2),
        image: Some(image.to_string()),
    }
}

pub fn discovery_seed() -> Vec<CatalogEntry> {
    vec![
        discovery_entry(
            1,
            "Mystic Chronicles",
            "A thrilling adventure following a young sorceress as she discovers her magical powers and fights against dark forces threatening her world.",
            &["Fantasy", "Adventure", "Magic"],
            "Studio Mystic",
            (2024, 1, 15),
            "TV Series",
            1,
            (2024, 1, 20),
            UpdateDay::Sun,
            "sample-anime-1.jpg",
        ),
        discovery_entry(
            2,
            "Azure Legends",
            "Epic tale of warriors wielding elemental powers in a world where magic and technology collide in spectacular battles.",
            &["Action", "Fantasy", "Drama"],
            "Azure Animation",
            (2024, 2, 1),
            "Movie",
            2,
            (2024, 1, 19),
            UpdateDay::Mon,
            "sample-anime-2.jpg",
        ),
        discovery_entry(
            3,
            "Crimson Destiny",
            "A warrior's journey to master ancient fighting techniques while protecting his homeland from invasion.",
            &["Action", "Martial Arts", "Adventure"],
            "Crimson Studios",
            (2024, 1, 30),
            "TV Series",
            3,
            (2024, 1, 21),
            UpdateDay::Tue,
            "sample-anime-3.jpg",
        ),
        discovery_entry(
            4,
            "Kawaii Dreams",
            "Heartwarming slice-of-life story about friendship, dreams, and the everyday magic found in ordinary moments.",
            &["Slice of Life", "Comedy", "Romance"],
            "Dreamland Animation",
            (2024, 2, 10),
            "TV Series",
            4,
            (2024, 1, 18),
            UpdateDay::Wed,
            "sample-anime-4.jpg",
        ),
        discovery_entry(
            5,
            "Shadow Realm",
            "Dark fantasy exploring the boundaries between reality and nightmare as heroes venture into forbidden dimensions.",
            &["Dark Fantasy", "Horror", "Supernatural"],
            "Shadow Productions",
            (2024, 1, 25),
            "OVA",
            5,
            (2024, 1, 17),
            UpdateDay::Thu,
            "sample-anime-1.jpg",
        ),
        discovery_entry(
            6,
            "Neon Tokyo 2099",
            "Cyberpunk adventure in a futuristic Tokyo where hackers and androids fight for freedom in a digital world.",
            &["Cyberpunk", "Sci-Fi", "Action"],
            "Neon Studios",
            (2024, 2, 5),
            "TV Series",
            6,
            (2024, 1, 22),
            UpdateDay::Fri,
            "sample-anime-2.jpg",
        ),
        discovery_entry(
            7,
            "Dragon Heart Academy",
            "School life meets fantasy as students learn to bond with dragons and master elemental magic.",
            &["School", "Fantasy", "Adventure"],
            "Academy Animation",
            (2024, 1, 20),
            "TV Series",
            7,
            (2024, 1, 16),
            UpdateDay::Sat,
            "sample-anime-3.jpg",
        ),
        discovery_entry(
            8,
            "Starlight Melody",
            "Musical adventure about aspiring idols who discover their songs have the power to heal hearts and save the world.",
            &["Music", "Romance", "Supernatural"],
            "Melody Works",
            (2024, 2, 15),
            "Movie",
            8,
            (2024, 1, 15),
            UpdateDay::Sun,
            "sample-anime-4.jpg",
        ),
        discovery_entry(
            9,
            "Phantom Hunters",
            "Supernatural thriller following a team of investigators who hunt ghosts and other paranormal entities.",
            &["Supernatural", "Thriller", "Action"],
            "Phantom Studios",
            (2024, 1, 12),
            "TV Series",
            9,
            (2024, 1, 14),
            UpdateDay::Mon,
            "sample-anime-1.jpg",
        ),
        discovery_entry(
            10,
            "Royal Guardians",
            "Medieval fantasy about knights protecting a magical kingdom from dark forces while uncovering ancient mysteries.",
            &["Medieval", "Fantasy", "Action"],
            "Royal Animation",
            (2024, 1, 8),
            "TV Series",
            10,
            (2024, 1, 13),
            UpdateDay::Tue,
            "sample-anime-2.jpg",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn admin_entry(
    id: u64,
    title: &str,
    alternative_title: &str,
    description: &str,
    genres: &[&str],
    rating: f64,
    episode_count: u32,
    status: AiringStatus,
    year: u16,
    studio: &str,
) -> CatalogEntry {
    CatalogEntry {
        id: EntryId(id),
        title: title.to_string(),
        alternative_title: Some(alternative_title.to_string()),
        description: description.to_string(),
        genres: tags(genres),
        popularity_rank: None,
        last_update: None,
        update_day: None,
        rating: Some(rating),
        episode_count: Some(episode_count),
        year: Some(year),
        studio: Some(studio.to_string()),
        status: Some(status),
        format: None,
        premiere: None,
        image: None,
    }
}

pub fn admin_seed() -> Vec<CatalogEntry> {
    vec![
        admin_entry(
            1,
            "Attack on Titan",
            "進撃の巨人",
            "Humanity fights for survival against man-eating giants.",
            &["Action", "Drama", "Fantasy"],
            9.0,
            75,
            AiringStatus::Completed,
            2013,
            "Mappa",
        ),
        admin_entry(
            2,
            "Demon Slayer",
            "鬼滅の刃",
            "Tanjiro becomes a demon slayer to save his sister.",
            &["Action", "Supernatural", "Historical"],
            8.7,
            32,
            AiringStatus::Ongoing,
            2019,
            "Ufotable",
        ),
        admin_entry(
            3,
            "Your Name",
            "君の名は",
            "A romance between two strangers who swap bodies.",
            &["Romance", "Drama", "Fantasy"],
            8.4,
            1,
            AiringStatus::Movie,
            2016,
            "CoMix Wave Films",
        ),
        admin_entry(
            4,
            "One Piece",
            "ワンピース",
            "Monkey D. Luffy and his crew search for the One Piece.",
            &["Action", "Adventure", "Comedy"],
            8.9,
            1000,
            AiringStatus::Ongoing,
            1999,
            "Toei Animation",
        ),
    ]
}
