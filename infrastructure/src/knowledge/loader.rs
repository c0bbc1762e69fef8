//! Knowledge base file loading

use super::IndexError;
use std::path::Path;
use tracing::info;
use triage_domain::KnowledgeEntry;

/// Read the curated entries from a JSON array file.
///
/// Entries without an `id` get `doc_<position>`.
pub fn load_entries(path: &Path) -> Result<Vec<KnowledgeEntry>, IndexError> {
    let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<KnowledgeEntry> =
        serde_json::from_str(&content).map_err(|e| IndexError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for (position, entry) in entries.iter_mut().enumerate() {
        if entry.id.trim().is_empty() {
            entry.id = format!("doc_{}", position);
        }
    }

    info!("Read {} knowledge entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledge_base.json");
        std::fs::write(
            &path,
            r#"[
  {"id": "kb-001", "question": "How do I restart a pod?", "answer": "kubectl rollout restart", "team": "platform", "tags": ["kubernetes"]},
  {"question": "Who owns DNS?", "answer": "The network team."}
]"#,
        )
        .unwrap();

        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "kb-001");
        assert_eq!(entries[0].tags, vec!["kubernetes"]);
        assert_eq!(entries[1].id, "doc_1");
        assert_eq!(entries[1].team, "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IndexError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("knowledge_base.json");
        std::fs::write(&path, r#"{"question": "not an array"}"#).unwrap();
        assert!(matches!(
            load_entries(&path).unwrap_err(),
            IndexError::Parse { .. }
        ));
    }
}
