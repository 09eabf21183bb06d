//! End-to-end tests: CSV fixtures on disk through the loader into the
//! recommendation engine, the way the binary drives the library.

use anyhow::Result;
use cans::engine;
use cans::headphone::{BassLevel, SoundProfile, UseCase};
use cans::loader::{self, DataLoadError};
use cans::song::Genre;
use std::io::Write;
use tempfile::NamedTempFile;

const SONGS_HEADER: &str = "track_id,track_name,track_artist,track_popularity,\
    playlist_genre,playlist_subgenre,danceability,energy,valence,tempo,acousticness,loudness";

const HEADPHONES_HEADER: &str =
    "headphone_id,brand,model,price,type,use_case,bass_level,sound_profile,noise_cancellation";

fn write_fixture(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

fn headphones_fixture() -> Result<NamedTempFile> {
    write_fixture(&format!(
        "{HEADPHONES_HEADER}\n\
         h1,AKG,K371,179.00,Over-ear,Studio,Low,Flat,No\n\
         h2,JBL,Endurance Peak,119.95,In-ear,Workout,High,Bass-heavy,No\n\
         h3,Sony,WH-1000XM5,399.99,Over-ear,Casual,Medium,Balanced,Yes\n\
         h4,Beats,Powerbeats Pro,199.95,In-ear,Workout,High,Bass-heavy,No\n\
         h5,Sennheiser,HD 600,399.00,Over-ear,Studio,Low,Flat,No\n\
         h6,Anker,Soundcore Life,59.99,Over-ear,Casual,High,Bass-heavy,Yes\n"
    ))
}

fn songs_fixture() -> Result<NamedTempFile> {
    write_fixture(&format!(
        "{SONGS_HEADER}\n\
         t1,Dance Monkey,Tones And I,96,pop,dance pop,0.82,0.59,0.54,98.0,0.69,-6.4\n\
         t2,Enter Sandman,Metallica,78,rock,hard rock,0.58,0.82,0.61,123.3,0.0,-4.9\n\
         t3,Animals,Martin Garrix,70,edm,big room,0.68,0.98,0.32,128.0,0.0,-3.2\n\
         t4,Sicko Mode,Travis Scott,88,rap,trap,0.83,0.73,0.45,155.0,0.01,-3.7\n\
         t5,Despacito,Luis Fonsi,85,latin,latin pop,0.66,0.79,0.85,89.0,0.21,-4.8\n\
         t6,Blinding Lights,The Weeknd,98,pop,dance pop,0.51,0.73,0.33,171.0,0.0,-5.9\n"
    ))
}

#[test]
fn load_then_recommend_ranks_the_expected_model_first() -> Result<()> {
    let file = headphones_fixture()?;
    let catalog = loader::load_headphones(file.path())?;
    assert!(catalog.is_clean());

    let ranked = engine::recommend("Rap", "Workout", &catalog.records);
    // Both workout in-ears take the top spots, catalog order between them.
    assert_eq!(ranked[0].headphone.id, "h2");
    assert_eq!(ranked[1].headphone.id, "h4");
    assert_eq!(ranked[0].score, ranked[1].score);
    // Every entry of the catalog is still represented in the full ranking.
    assert_eq!(ranked.len(), catalog.records.len());
    Ok(())
}

#[test]
fn load_then_recommend_studio_prefers_flat_references() -> Result<()> {
    let file = headphones_fixture()?;
    let catalog = loader::load_headphones(file.path())?;

    for genre in ["Pop", "Rock", "EDM", "Rap", "Latin"] {
        let ranked = engine::recommend(genre, "Studio", &catalog.records);
        assert_eq!(ranked[0].headphone.use_case, UseCase::Studio, "genre {genre}");
        assert_eq!(
            ranked[0].headphone.sound_profile,
            SoundProfile::Flat,
            "genre {genre}"
        );
    }
    Ok(())
}

#[test]
fn shortlist_is_bounded_and_deterministic() -> Result<()> {
    let file = headphones_fixture()?;
    let catalog = loader::load_headphones(file.path())?;

    let first = engine::shortlist("EDM", "Casual", &catalog.records);
    assert!(first.len() <= engine::SHORTLIST_LEN);

    let ids = |ranked: &[engine::Scored<'_>]| -> Vec<String> {
        ranked.iter().map(|s| s.headphone.id.clone()).collect()
    };
    for _ in 0..3 {
        let again = engine::shortlist("EDM", "Casual", &catalog.records);
        assert_eq!(ids(&first), ids(&again));
    }
    Ok(())
}

#[test]
fn songs_load_and_filter_by_genre_end_to_end() -> Result<()> {
    let file = songs_fixture()?;
    let load = loader::load_songs(file.path())?;
    assert!(load.is_clean());
    assert_eq!(load.records.len(), 6);

    let pop = engine::filter_songs_by_genre("Pop", &load.records);
    let titles: Vec<&str> = pop.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Dance Monkey", "Blinding Lights"]);

    assert!(engine::filter_songs_by_genre("Jazz", &load.records).is_empty());
    Ok(())
}

#[test]
fn malformed_rows_in_either_table_do_not_abort_the_run() -> Result<()> {
    let songs = write_fixture(&format!(
        "{SONGS_HEADER}\n\
         t1,Good Song,Artist,50,pop,dance pop,0.5,0.5,0.5,120.0,0.1,-6.0\n\
         t2,Bad Song,Artist,fifty,pop,dance pop,0.5,0.5,0.5,120.0,0.1,-6.0\n\
         t3,Other Song,Artist,60,rock,hard rock,0.5,0.8,0.5,130.0,0.0,-5.0\n"
    ))?;
    let headphones = write_fixture(&format!(
        "{HEADPHONES_HEADER}\n\
         h1,Sony,Good,100.0,Over-ear,Casual,Medium,Balanced,Yes\n\
         h2,Sony,Bad,cheap,Over-ear,Casual,Medium,Balanced,Yes\n"
    ))?;

    let song_load = loader::load_songs(songs.path())?;
    assert_eq!(song_load.records.len(), 2);
    assert_eq!(song_load.skipped.len(), 1);
    assert_eq!(song_load.skipped[0].line, 3);

    let hp_load = loader::load_headphones(headphones.path())?;
    assert_eq!(hp_load.records.len(), 1);
    assert_eq!(hp_load.skipped.len(), 1);

    // What survived is still usable downstream.
    let ranked = engine::recommend("Pop", "Casual", &hp_load.records);
    assert_eq!(ranked[0].headphone.id, "h1");
    Ok(())
}

#[test]
fn missing_dataset_file_aborts_with_file_not_found() {
    let err = loader::load_headphones("/definitely/not/here.csv".as_ref()).unwrap_err();
    assert!(matches!(err, DataLoadError::FileNotFound(_)));
}

#[test]
fn scored_json_output_flattens_headphone_fields() -> Result<()> {
    let file = headphones_fixture()?;
    let catalog = loader::load_headphones(file.path())?;
    let ranked = engine::shortlist("Rock", "Workout", &catalog.records);

    let json = serde_json::to_value(&ranked)?;
    let first = &json[0];
    assert_eq!(first["headphone_id"], "h2");
    assert_eq!(first["brand"], "JBL");
    assert_eq!(first["use_case"], "Workout");
    assert_eq!(first["bass_level"], "High");
    assert_eq!(first["sound_profile"], "Bass-heavy");
    assert!(first["score"].as_u64().unwrap() > 0);
    Ok(())
}

#[test]
fn round_trip_fidelity_for_numeric_and_string_fields() -> Result<()> {
    let file = songs_fixture()?;
    let load = loader::load_songs(file.path())?;

    let sandman = load
        .records
        .iter()
        .find(|s| s.id == "t2")
        .expect("t2 present");
    assert_eq!(sandman.title, "Enter Sandman");
    assert_eq!(sandman.artist, "Metallica");
    assert_eq!(sandman.popularity, 78);
    assert_eq!(sandman.genre, Genre::Rock);
    assert_eq!(sandman.subgenre, "hard rock");
    assert_eq!(sandman.danceability, 0.58);
    assert_eq!(sandman.energy, 0.82);
    assert_eq!(sandman.valence, 0.61);
    assert_eq!(sandman.tempo, 123.3);
    assert_eq!(sandman.acousticness, 0.0);
    assert_eq!(sandman.loudness, -4.9);
    Ok(())
}

#[test]
fn bass_levels_survive_loading_as_ordinals() -> Result<()> {
    let file = headphones_fixture()?;
    let catalog = loader::load_headphones(file.path())?;
    let max_bass = catalog
        .records
        .iter()
        .map(|hp| hp.bass_level)
        .max()
        .expect("non-empty catalog");
    assert_eq!(max_bass, BassLevel::High);
    Ok(())
}
