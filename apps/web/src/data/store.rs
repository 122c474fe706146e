//! Read-only access to the reference JSON files. Every call re-reads its
//! file; the datasets are small and requests hold no shared state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::data::models::{MajorWeights, SubfieldRecord};

const SUBFIELDS_FILE: &str = "subfield_datas.json";
const PERSIAN_SUBFIELDS_FILE: &str = "persian_subfield_datas.json";
const TEST_FILE: &str = "test_datas.json";
const MAJORS_SCORES_FILE: &str = "majors_scores.json";

/// Which subfield dataset to read. The quiz definition and weight table are
/// locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    pub fn from_param(param: Option<&str>) -> Locale {
        match param {
            Some("fa") => Locale::Fa,
            _ => Locale::En,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub async fn load_subfields(&self, locale: Locale) -> Result<Vec<SubfieldRecord>> {
        let file = match locale {
            Locale::En => SUBFIELDS_FILE,
            Locale::Fa => PERSIAN_SUBFIELDS_FILE,
        };
        self.read_json(file).await
    }

    /// The quiz definition is an opaque blob handed straight to the view.
    pub async fn read_test_data(&self) -> Result<Value> {
        self.read_json(TEST_FILE).await
    }

    pub async fn load_major_weights(&self) -> Result<MajorWeights> {
        self.read_json(MAJORS_SCORES_FILE).await
    }

    async fn read_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.data_dir.join(file);
        let raw = tokio::fs::read(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
