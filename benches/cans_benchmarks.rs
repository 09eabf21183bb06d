//! Criterion benchmarks for the scoring and filtering hot paths.
//!
//! The engine is expected to rank a catalog of tens of thousands of entries
//! in well under a second; these benchmarks keep that promise observable.

use cans::engine::{self, ScoringWeights};
use cans::headphone::{BassLevel, Headphone, HeadphoneType, SoundProfile, UseCase};
use cans::song::{Genre, Song};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_catalog(len: usize) -> Vec<Headphone> {
    let use_cases = UseCase::ALL;
    let bass = [BassLevel::Low, BassLevel::Medium, BassLevel::High];
    let profiles = [
        SoundProfile::Balanced,
        SoundProfile::BassHeavy,
        SoundProfile::Flat,
    ];
    (0..len)
        .map(|i| Headphone {
            id: format!("h{i}"),
            brand: format!("Brand{}", i % 17),
            model: format!("Model {i}"),
            price: 20.0 + (i % 500) as f64,
            kind: HeadphoneType::OverEar,
            use_case: use_cases[i % use_cases.len()],
            bass_level: bass[i % bass.len()],
            sound_profile: profiles[i % profiles.len()],
            noise_cancellation: i % 2 == 0,
        })
        .collect()
}

fn synthetic_songs(len: usize) -> Vec<Song> {
    (0..len)
        .map(|i| Song {
            id: format!("t{i}"),
            title: format!("Title {i}"),
            artist: format!("Artist {}", i % 101),
            popularity: (i % 101) as u8,
            genre: Genre::ALL[i % Genre::ALL.len()],
            subgenre: "sub".to_string(),
            danceability: 0.5,
            energy: 0.5,
            valence: 0.5,
            tempo: 120.0,
            acousticness: 0.1,
            loudness: -6.0,
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    let weights = ScoringWeights::default();
    c.bench_function("rank 10k headphones", |b| {
        b.iter(|| {
            engine::rank(
                black_box(Genre::Edm),
                black_box(UseCase::Workout),
                black_box(&catalog),
                &weights,
            )
        });
    });
}

fn bench_shortlist(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);
    c.bench_function("shortlist 10k headphones", |b| {
        b.iter(|| engine::shortlist(black_box("Rock"), black_box("Workout"), &catalog));
    });
}

fn bench_filter_songs(c: &mut Criterion) {
    let songs = synthetic_songs(30_000);
    c.bench_function("filter 30k songs by genre", |b| {
        b.iter(|| engine::filter_songs_by_genre(black_box("Pop"), &songs));
    });
}

criterion_group!(benches, bench_rank, bench_shortlist, bench_filter_songs);
criterion_main!(benches);
