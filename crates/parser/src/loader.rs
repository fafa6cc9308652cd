//! Service discovery over botocore and boto3 data directories

use crate::botocore::ServiceParser;
use botodocs_common::{DocgenError, Result, ServiceCatalog, ServiceDefinition};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SERVICE_FILE: &str = "service-2.json";
pub const PAGINATORS_FILE: &str = "paginators-1.json";
pub const WAITERS_FILE: &str = "waiters-2.json";
pub const RESOURCES_FILE: &str = "resources-1.json";

/// Suffix of compressed models, as shipped by botocore 1.32 and later
pub const GZIP_SUFFIX: &str = ".gz";

/// Loads services from `<data-dir>/<service>/<api-version>/` layouts
///
/// `data_dir` is botocore's `data/` directory. `resources_dir` is boto3's
/// `data/` directory, when resource docs are wanted.
#[derive(Debug, Clone)]
pub struct BotocoreLoader {
    data_dir: PathBuf,
    resources_dir: Option<PathBuf>,
}

impl BotocoreLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            resources_dir: None,
        }
    }

    pub fn with_resources_dir(mut self, resources_dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = Some(resources_dir.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl ServiceCatalog for BotocoreLoader {
    fn service_names(&self) -> Result<Vec<String>> {
        if !self.data_dir.is_dir() {
            return Err(DocgenError::Parse(format!(
                "Not a directory: {}",
                self.data_dir.display()
            )));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            if latest_version_dir(&path, SERVICE_FILE)?.is_none() {
                debug!(path = %path.display(), "no service model, skipping");
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        info!(count = names.len(), dir = %self.data_dir.display(), "discovered services");
        Ok(names)
    }

    fn load_service(&self, name: &str) -> Result<ServiceDefinition> {
        let service_root = self.data_dir.join(name);
        let version_dir = latest_version_dir(&service_root, SERVICE_FILE)?
            .ok_or_else(|| DocgenError::Parse(format!("Unknown service: {}", name)))?;
        debug!(service = name, dir = %version_dir.display(), "loading service");

        let service_file = model_file(&version_dir, SERVICE_FILE)
            .ok_or_else(|| DocgenError::Parse(format!("Unknown service: {}", name)))?;
        let mut parser = ServiceParser::from_file(service_file, name)?;

        if let Some(paginators) = model_file(&version_dir, PAGINATORS_FILE) {
            parser = parser.with_paginators_file(&paginators)?;
        }

        if let Some(waiters) = model_file(&version_dir, WAITERS_FILE) {
            parser = parser.with_waiters_file(&waiters)?;
        }

        if let Some(resources_dir) = &self.resources_dir {
            if let Some(dir) = latest_version_dir(&resources_dir.join(name), RESOURCES_FILE)? {
                if let Some(resources) = model_file(&dir, RESOURCES_FILE) {
                    parser = parser.with_resources_file(&resources)?;
                }
            }
        }

        parser.parse()
    }
}

/// `dir/file_name`, or its gzipped form when only that exists
pub fn model_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let plain = dir.join(file_name);
    if plain.is_file() {
        return Some(plain);
    }
    let gzipped = dir.join(format!("{}{}", file_name, GZIP_SUFFIX));
    gzipped.is_file().then_some(gzipped)
}

/// Newest `<api-version>` directory under `service_root` that holds `file_name`,
/// plain or gzipped
///
/// API versions are dates, so the lexicographically greatest wins.
pub fn latest_version_dir(service_root: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    if !service_root.is_dir() {
        return Ok(None);
    }

    let mut best: Option<PathBuf> = None;
    for entry in fs::read_dir(service_root)? {
        let path = entry?.path();
        if model_file(&path, file_name).is_none() {
            continue;
        }
        if best.as_ref().map_or(true, |b| path.file_name() > b.file_name()) {
            best = Some(path);
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_latest_version_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("s3");
        for version in ["2006-03-01", "2019-01-01", "2020-06-30"] {
            fs::create_dir_all(root.join(version)).unwrap();
        }
        fs::write(root.join("2006-03-01").join(SERVICE_FILE), "{}").unwrap();
        fs::write(root.join("2019-01-01").join(SERVICE_FILE), "{}").unwrap();

        let latest = latest_version_dir(&root, SERVICE_FILE).unwrap().unwrap();
        assert!(latest.ends_with("2019-01-01"));

        let gzipped = root.join("2020-06-30").join(format!("{}{}", SERVICE_FILE, GZIP_SUFFIX));
        fs::write(&gzipped, b"").unwrap();
        let latest = latest_version_dir(&root, SERVICE_FILE).unwrap().unwrap();
        assert!(latest.ends_with("2020-06-30"));
        assert_eq!(model_file(&latest, SERVICE_FILE), Some(gzipped));

        assert!(latest_version_dir(&root, WAITERS_FILE).unwrap().is_none());
        assert!(latest_version_dir(&temp.path().join("nope"), SERVICE_FILE)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_data_dir() {
        let loader = BotocoreLoader::new("/nonexistent/botocore/data");
        assert!(loader.service_names().is_err());
        assert!(loader.load_service("s3").is_err());
    }
}
