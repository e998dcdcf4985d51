use std::path::{Path, PathBuf};

use edmgen_core::Model;

use super::{Manifest, parse::parse_manifest};
use crate::{Error, Result};

/// A model.toml file with its raw content, parsed manifest and resolved model.
#[derive(Debug)]
pub struct ModelToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
    model: Model,
}

impl ModelToml {
    /// Open, parse and resolve a model.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let (manifest, model) = parse_manifest(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
            model,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the resolved model.
    pub fn model(&self) -> &Model {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_open_model_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [model]
            namespace = "contoso"

            [types.order]
            kind = "entity"
            properties = {{ id = "Edm.Guid" }}
            "#
        )
        .unwrap();

        let model_toml = ModelToml::open(file.path()).unwrap();
        assert_eq!(model_toml.path(), file.path());
        assert!(model_toml.content().contains("contoso"));
        assert_eq!(model_toml.manifest().types.len(), 1);
        assert_eq!(model_toml.model().types[0].properties[0].declared_type.name, "Guid");
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelToml::open(dir.path().join("model.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
