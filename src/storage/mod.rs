//! Favorites store — the `/cats` resource backed by a JSON file
//!
//! Mirrors the REST shape the page talks to: `POST /cats` creates a record
//! and assigns an id, `DELETE /cats/{id}` removes it, `GET /cats` lists
//! `{id, dna, parent0, parent1}` records. Records are rehydrated into cats
//! through the same validation as any other sequence.

use crate::cat::{Cat, CatId, CatOptions, Dna, Parentage};
use crate::error::{CatError, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFavorite {
    pub dna: Dna,
    pub parent0: Option<Dna>,
    pub parent1: Option<Dna>,
}

impl NewFavorite {
    /// Request body for a bred cat
    pub fn from_cat(cat: &Cat) -> Result<Self> {
        let parents = cat.parents().ok_or(CatError::NotBred)?;
        Ok(Self {
            dna: cat.dna().clone(),
            parent0: Some(parents.first().clone()),
            parent1: Some(parents.second().clone()),
        })
    }
}

/// A stored favorite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatRecord {
    pub id: CatId,
    pub dna: Dna,
    pub parent0: Option<Dna>,
    pub parent1: Option<Dna>,
}

impl CatRecord {
    /// Rebuild the cat this record describes
    pub fn to_cat(&self) -> Result<Cat> {
        let parents = match (&self.parent0, &self.parent1) {
            (Some(a), Some(b)) => Some(Parentage::new(a.clone(), b.clone())),
            (None, None) => None,
            _ => {
                return Err(CatError::InvalidRecord(format!(
                    "record {} has only one parent",
                    self.id
                )))
            }
        };
        Ok(Cat::from_parts(
            self.dna.clone(),
            CatOptions {
                parents,
                id: Some(self.id),
            },
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub owner: String,
    pub created_at: String,
    /// Next id to hand out; ids are never reused
    pub next_id: u64,
    pub total_favorited_ever: u64,
    pub total_released: u64,
}

/// Persistent set of favorite cats
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteStore {
    pub cats: Vec<CatRecord>,
    pub metadata: StoreMetadata,
    #[serde(skip)]
    path: PathBuf,
}

impl FavoriteStore {
    /// Load the store at `path`, or start an empty one if no file exists yet
    ///
    /// A file that exists but cannot be read or contains an invalid record is
    /// an error; the store is never silently reset over existing favorites.
    pub fn open(path: impl AsRef<Path>, owner: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let mut store: FavoriteStore = serde_json::from_str(&data).map_err(|e| {
                warn!("Refusing to load store {}: {}", path.display(), e);
                e
            })?;
            store.path = path;
            info!("Loaded {} favorites from {}", store.cats.len(), store.path.display());
            return Ok(store);
        }
        Ok(Self {
            cats: Vec::new(),
            path,
            metadata: StoreMetadata {
                owner: owner.to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                next_id: 1,
                total_favorited_ever: 0,
                total_released: 0,
            },
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `POST /cats`
    pub fn create(&mut self, favorite: NewFavorite) -> Result<CatRecord> {
        if favorite.parent0.is_some() != favorite.parent1.is_some() {
            return Err(CatError::InvalidRecord(
                "parent0 and parent1 must both be present or both absent".into(),
            ));
        }
        let record = CatRecord {
            id: CatId(self.metadata.next_id),
            dna: favorite.dna,
            parent0: favorite.parent0,
            parent1: favorite.parent1,
        };
        self.metadata.next_id += 1;
        self.metadata.total_favorited_ever += 1;
        info!("Favorited #{} {}", record.id, record.dna);
        self.cats.push(record.clone());
        Ok(record)
    }

    /// `DELETE /cats/{id}`
    pub fn delete(&mut self, id: CatId) -> Result<CatRecord> {
        let pos = self
            .cats
            .iter()
            .position(|r| r.id == id)
            .ok_or(CatError::NotFound(id))?;
        let record = self.cats.remove(pos);
        self.metadata.total_released += 1;
        info!("Removed favorite #{} {}", record.id, record.dna);
        Ok(record)
    }

    /// `GET /cats`, ascending id
    pub fn list(&self) -> Vec<&CatRecord> {
        let mut records: Vec<&CatRecord> = self.cats.iter().collect();
        records.sort_by_key(|r| r.id);
        records
    }

    pub fn get(&self, id: CatId) -> Option<&CatRecord> {
        self.cats.iter().find(|r| r.id == id)
    }

    pub fn count(&self) -> usize {
        self.cats.len()
    }

    /// Save a bred cat, returning it with its new id
    pub fn favorite(&mut self, cat: &Cat) -> Result<Cat> {
        let record = self.create(NewFavorite::from_cat(cat)?)?;
        Ok(cat.with_id(record.id))
    }

    /// Forget a cat; returns `false` when it was never saved
    pub fn release(&mut self, cat: &Cat) -> Result<bool> {
        match cat.id() {
            Some(id) => self.delete(id).map(|_| true),
            None => Ok(false),
        }
    }

    /// Every stored favorite as a cat
    pub fn cats(&self) -> Result<Vec<Cat>> {
        self.list().into_iter().map(CatRecord::to_cat).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "FavoriteStore '{}' | {} favorites | {} favorited ever | {} released",
            self.metadata.owner,
            self.cats.len(),
            self.metadata.total_favorited_ever,
            self.metadata.total_released
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIRE: &str = "SAEGRHYOMCCREPUGDNDDIICTSJZQRYVQ";
    const DAM: &str = "THWOMALWUJSLATWQMBCFTPOYHVDRESWL";

    fn kitten() -> Cat {
        Cat::mate_by_dna(SIRE, DAM).unwrap()
    }

    #[test]
    fn test_favorite_assigns_increasing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoriteStore::open(dir.path().join("cats.json"), "tester").unwrap();
        let a = store.favorite(&kitten()).unwrap();
        let b = store.favorite(&kitten()).unwrap();
        assert_eq!(a.id(), Some(CatId(1)));
        assert_eq!(b.id(), Some(CatId(2)));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_favorite_rejects_unbred_cat() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoriteStore::open(dir.path().join("cats.json"), "tester").unwrap();
        let err = store.favorite(&Cat::new(SIRE).unwrap()).unwrap_err();
        assert!(matches!(err, CatError::NotBred));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_delete_and_ids_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoriteStore::open(dir.path().join("cats.json"), "tester").unwrap();
        let a = store.favorite(&kitten()).unwrap();
        assert!(store.release(&a).unwrap());
        assert!(matches!(store.delete(CatId(1)), Err(CatError::NotFound(CatId(1)))));
        let b = store.favorite(&kitten()).unwrap();
        assert_eq!(b.id(), Some(CatId(2)));
        assert_eq!(store.metadata.total_released, 1);
    }

    #[test]
    fn test_release_unsaved_cat_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoriteStore::open(dir.path().join("cats.json"), "tester").unwrap();
        assert!(!store.release(&kitten()).unwrap());
    }

    #[test]
    fn test_persist_and_rehydrate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cats.json");
        let saved = {
            let mut store = FavoriteStore::open(&path, "tester").unwrap();
            let saved = store.favorite(&kitten()).unwrap();
            store.save().unwrap();
            saved
        };
        let store = FavoriteStore::open(&path, "someone-else").unwrap();
        assert_eq!(store.metadata.owner, "tester");
        let cats = store.cats().unwrap();
        assert_eq!(cats, vec![saved]);
        assert!(cats[0].is_kitten());
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cats.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(FavoriteStore::open(&path, "tester"), Err(CatError::Json(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_invalid_record_keeps_other_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cats.json");
        let mut store = FavoriteStore::open(&path, "tester").unwrap();
        store.favorite(&kitten()).unwrap();
        store.favorite(&Cat::mate_by_dna(DAM, SIRE).unwrap()).unwrap();
        store.save().unwrap();

        // hand-edit one record into an invalid sequence
        let data = std::fs::read_to_string(&path).unwrap();
        let edited = data.replacen(
            "STAHEWGORMHAYLOWMUCJCSRLEAPTUWGQ",
            "stahewgormhaylowmucjcsrleaptuwgq",
            1,
        );
        assert_ne!(edited, data);
        std::fs::write(&path, &edited).unwrap();

        assert!(FavoriteStore::open(&path, "tester").is_err());
        // nothing was overwritten, the other record is still on disk
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, edited);
        assert!(on_disk.contains("TSHAWEOGMRAHLYWOUMJCSCLRAETPWUQG"));
        assert!(on_disk.contains("\"next_id\": 3"));
    }

    #[test]
    fn test_missing_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cats.json");
        let store = FavoriteStore::open(&path, "tester").unwrap();
        assert_eq!(store.count(), 0);
        assert_eq!(store.metadata.next_id, 1);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_record_format() {
        let json = format!(
            r#"{{"id": 3, "dna": "STAHEWGORMHAYLOWMUCJCSRLEAPTUWGQ", "parent0": "{}", "parent1": "{}"}}"#,
            SIRE, DAM
        );
        let record: CatRecord = serde_json::from_str(&json).unwrap();
        let cat = record.to_cat().unwrap();
        assert_eq!(cat.id(), Some(CatId(3)));
        assert_eq!(cat.parents().unwrap().second().as_str(), DAM);

        let bad = r#"{"id": 4, "dna": "lowercase", "parent0": null, "parent1": null}"#;
        assert!(serde_json::from_str::<CatRecord>(bad).is_err());
    }

    #[test]
    fn test_half_parentage_is_invalid() {
        let record = CatRecord {
            id: CatId(9),
            dna: Dna::parse(SIRE).unwrap(),
            parent0: Some(Dna::parse(DAM).unwrap()),
            parent1: None,
        };
        assert!(matches!(record.to_cat(), Err(CatError::InvalidRecord(_))));

        let dir = tempfile::tempdir().unwrap();
        let mut store = FavoriteStore::open(dir.path().join("cats.json"), "tester").unwrap();
        let body = NewFavorite {
            dna: record.dna.clone(),
            parent0: None,
            parent1: record.parent0.clone(),
        };
        assert!(store.create(body).is_err());
    }
}
