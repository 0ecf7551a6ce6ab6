use crate::word::{normalize_part_of_speech, Word};
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

static POOL_DIR: Dir = include_dir!("src/pool/lists");

/// Header labels recognised on the first row of a CSV word list
const HEADER_LABELS: &[&str] = &[
    "source",
    "target",
    "english",
    "turkish",
    "word",
    "translation",
    "meaning",
    "pos",
    "part_of_speech",
    "part of speech",
    "ingilizce",
    "türkçe",
    "tür",
    "kelime",
    "anlam",
];

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to read word pool: {0}")]
    Io(#[from] io::Error),
    #[error("invalid word pool json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid word pool csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("no built-in word pool named '{0}'")]
    UnknownPool(String),
    #[error("unsupported word pool format '{0}' (expected json or csv)")]
    UnsupportedFormat(String),
}

/// The words eligible for one quiz session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPool {
    pub name: String,
    pub words: Vec<Word>,
}

impl WordPool {
    pub fn new(name: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Load one of the pools compiled into the binary
    pub fn embedded(name: &str) -> Result<Self, PoolError> {
        let file = POOL_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| PoolError::UnknownPool(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| PoolError::UnknownPool(name.to_string()))?;
        Ok(serde_json::from_str(contents)?)
    }

    /// Names accepted by [`WordPool::embedded`], sorted
    pub fn embedded_names() -> Vec<String> {
        let mut names: Vec<String> = POOL_DIR
            .files()
            .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
            .filter_map(|f| f.path().file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Load a pool file, picking the parser from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json_file(path),
            "csv" | "txt" => Self::from_csv_file(path),
            _ => Err(PoolError::UnsupportedFormat(ext)),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "csv".to_string());
        Self::from_csv_reader(File::open(path)?, &name)
    }

    /// Parse `source;target[;part_of_speech]` rows, `;` or `,` delimited.
    ///
    /// A header row is skipped, rows missing either text are dropped, and
    /// each kept row gets the id `<name>-<row number>`.
    pub fn from_csv_reader<R: Read>(mut reader: R, name: &str) -> Result<Self, PoolError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        let delimiter = detect_delimiter(&content);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(delimiter)
            .from_reader(content.as_bytes());

        let mut words = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let source = record.get(0).unwrap_or("");
            let target = record.get(1).unwrap_or("");

            if row == 0 && is_header(source, target) {
                continue;
            }
            if source.is_empty() || target.is_empty() {
                log::debug!("skipping row {} of '{name}': missing text", row + 1);
                continue;
            }

            let mut word = Word::new(format!("{name}-{}", row + 1), source, target);
            word.part_of_speech = record.get(2).and_then(normalize_part_of_speech);
            words.push(word);
        }

        Ok(Self::new(name, words))
    }

    pub fn find(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    if first_line.contains(';') {
        b';'
    } else {
        b','
    }
}

fn is_header(source: &str, target: &str) -> bool {
    [source, target]
        .iter()
        .any(|cell| HEADER_LABELS.contains(&fold_label(cell).as_str()))
}

/// Lowercase a header cell, dropping the combining dot left behind by `İ`
fn fold_label(cell: &str) -> String {
    cell.to_lowercase().replace('\u{307}', "")
}
