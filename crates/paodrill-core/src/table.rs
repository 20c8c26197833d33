//! Association table: CSV loading, validation, and lookup.
//!
//! The table is loaded once at startup and never mutated. Loading validates
//! the whole domain up front: exactly 100 rows covering 00..=99, no
//! duplicates, no empty fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::TrainerError;
use crate::model::{Association, Key, KEY_COUNT};

/// One CSV record. Capitalized aliases accept files written by other tools.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "Number")]
    number: String,
    #[serde(alias = "Person")]
    person: String,
    #[serde(alias = "Action")]
    action: String,
    #[serde(alias = "Object")]
    object: String,
}

/// Immutable mapping from every two-digit key to its PAO triple.
#[derive(Debug, Clone)]
pub struct AssociationTable {
    entries: BTreeMap<Key, Association>,
}

impl AssociationTable {
    /// Load the table from a CSV file with `number,person,action,object`
    /// columns. Fails with [`TrainerError::DataLoad`] unless the file
    /// contains exactly one well-formed row for each key 00..=99.
    pub fn load(path: &Path) -> Result<Self, TrainerError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            TrainerError::DataLoad(format!("cannot open {}: {e}", path.display()))
        })?;

        let mut entries = BTreeMap::new();
        for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
            let line = idx + 2; // header is line 1
            let row =
                row.map_err(|e| TrainerError::DataLoad(format!("line {line}: {e}")))?;
            let key: Key = row.number.parse().map_err(|_| {
                TrainerError::DataLoad(format!(
                    "line {line}: invalid key {:?}",
                    row.number
                ))
            })?;
            let association = Association {
                person: row.person.trim().to_string(),
                action: row.action.trim().to_string(),
                object: row.object.trim().to_string(),
            };
            if association.person.is_empty()
                || association.action.is_empty()
                || association.object.is_empty()
            {
                return Err(TrainerError::DataLoad(format!(
                    "key {key}: person, action, and object must all be non-empty"
                )));
            }
            if entries.insert(key, association).is_some() {
                return Err(TrainerError::DataLoad(format!("duplicate key {key}")));
            }
        }

        if entries.len() != KEY_COUNT {
            return Err(TrainerError::DataLoad(format!(
                "expected {KEY_COUNT} associations covering 00..=99, found {}",
                entries.len()
            )));
        }

        tracing::debug!(path = %path.display(), "loaded association table");
        Ok(Self { entries })
    }

    /// Look up the association for a key.
    pub fn get(&self, key: Key) -> Result<&Association, TrainerError> {
        self.entries
            .get(&key)
            .ok_or_else(|| TrainerError::UnknownKey(key.to_string()))
    }

    /// All keys in ascending numeric order.
    pub fn all_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.entries.keys().copied()
    }

    /// Number of associations (always 100 after a successful load).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: BTreeMap<Key, Association>) -> Self {
        Self { entries }
    }
}

/// Full synthetic table for engine tests: key NN maps to
/// "Person NN" / "Action NN" / "Object NN".
#[cfg(test)]
pub(crate) fn synthetic_table() -> AssociationTable {
    let entries = Key::all()
        .map(|key| {
            (
                key,
                Association {
                    person: format!("Person {key}"),
                    action: format!("Action {key}"),
                    object: format!("Object {key}"),
                },
            )
        })
        .collect();
    AssociationTable::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(rows: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "number,person,action,object").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn full_rows() -> Vec<String> {
        (0..100)
            .map(|i| format!("{i:02},Person {i:02},Action {i:02},Object {i:02}"))
            .collect()
    }

    #[test]
    fn loads_full_table_with_non_empty_fields() {
        let file = write_csv(&full_rows());
        let table = AssociationTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 100);
        for key in Key::all() {
            let assoc = table.get(key).unwrap();
            assert!(!assoc.person.is_empty());
            assert!(!assoc.action.is_empty());
            assert!(!assoc.object.is_empty());
        }
    }

    #[test]
    fn all_keys_is_ascending() {
        let file = write_csv(&full_rows());
        let table = AssociationTable::load(file.path()).unwrap();
        let keys: Vec<Key> = table.all_keys().collect();
        assert_eq!(keys.len(), 100);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn accepts_capitalized_headers_and_bare_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Number,Person,Action,Object").unwrap();
        for i in 0..100 {
            writeln!(file, "{i},P{i},A{i},O{i}").unwrap();
        }
        file.flush().unwrap();
        let table = AssociationTable::load(file.path()).unwrap();
        assert_eq!(table.get("07".parse().unwrap()).unwrap().person, "P7");
    }

    #[test]
    fn rejects_missing_file() {
        let err = AssociationTable::load(Path::new("no-such-file.csv")).unwrap_err();
        assert!(matches!(err, TrainerError::DataLoad(_)));
    }

    #[test]
    fn rejects_incomplete_table() {
        let mut rows = full_rows();
        rows.pop();
        let file = write_csv(&rows);
        let err = AssociationTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("found 99"));
    }

    #[test]
    fn rejects_duplicate_key() {
        let mut rows = full_rows();
        rows[99] = "07,Other,Other,Other".to_string();
        let file = write_csv(&rows);
        let err = AssociationTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate key 07"));
    }

    #[test]
    fn rejects_empty_field() {
        let mut rows = full_rows();
        rows[42] = "42,Einstein,,Blackboard".to_string();
        let file = write_csv(&rows);
        let err = AssociationTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn rejects_out_of_domain_key() {
        let mut rows = full_rows();
        rows[0] = "123,Person,Action,Object".to_string();
        let file = write_csv(&rows);
        let err = AssociationTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn get_fails_for_missing_key() {
        let table = AssociationTable::from_entries(Default::default());
        let err = table.get("07".parse().unwrap()).unwrap_err();
        assert!(matches!(err, TrainerError::UnknownKey(_)));
    }
}
