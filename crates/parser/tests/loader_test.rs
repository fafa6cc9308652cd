//! Integration tests for loading services from botocore/boto3 data trees

use botodocs_common::{DocgenError, ServiceCatalog, ShapeKind};
use botodocs_parser::{BotocoreLoader, GZIP_SUFFIX, PAGINATORS_FILE, SERVICE_FILE, WAITERS_FILE};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn loader() -> BotocoreLoader {
    BotocoreLoader::new(fixtures().join("botocore")).with_resources_dir(fixtures().join("boto3"))
}

#[test]
fn test_discovers_services_sorted() {
    let names = loader().service_names().unwrap();
    assert_eq!(names, vec!["broken", "s3", "sdb"]);
}

#[test]
fn test_load_full_service() {
    let service = loader().load_service("s3").unwrap();

    assert_eq!(service.name(), "s3");
    assert_eq!(service.service_path(), "services/s3");
    assert_eq!(service.model.metadata.display_name(), "Amazon S3");
    assert_eq!(service.model.metadata.class_name(), "S3");

    // Operations come out sorted by name
    let operations: Vec<&str> = service
        .model
        .operations
        .iter()
        .map(|op| op.name.as_str())
        .collect();
    assert_eq!(
        operations,
        vec![
            "CreateBucket",
            "DeleteBucket",
            "GetBucketLocation",
            "HeadBucket",
            "ListBuckets",
            "ListObjects"
        ]
    );
    let location = service.model.operation("GetBucketLocation").unwrap();
    assert!(location.deprecated);
    assert!(service.model.operation("ListBuckets").unwrap().input.is_none());

    let graph = &service.model.shapes;
    let request = graph.shape_for("CreateBucketRequest").unwrap();
    assert_eq!(request.required_members(), vec!["Bucket"]);
    assert_eq!(
        request.members()[0].documentation.as_deref(),
        Some("<p>The canned ACL to apply to the bucket.</p>")
    );
    assert_eq!(
        graph.shape_for("ACL").unwrap().enum_values,
        vec!["private", "public-read"]
    );
    assert_eq!(graph.shape_for("Body").unwrap().kind, ShapeKind::Blob);

    // FolderList -> Folder -> FolderList
    let folder = graph.lookup("Folder").unwrap();
    match &graph.shape_for("FolderList").unwrap().kind {
        ShapeKind::List { member } => assert_eq!(*member, folder),
        other => panic!("expected a list, got {:?}", other),
    }

    assert_eq!(service.paginators.len(), 1);
    let paginator = &service.paginators[0];
    assert_eq!(paginator.name, "ListObjects");
    assert_eq!(paginator.input_token, vec!["Marker"]);
    assert_eq!(paginator.output_token, vec!["NextMarker || Contents[-1].Key"]);
    assert_eq!(paginator.limit_key.as_deref(), Some("MaxKeys"));
    assert_eq!(paginator.result_key, vec!["Contents", "CommonPrefixes"]);

    let waiters: Vec<(&str, u32, u32)> = service
        .waiters
        .iter()
        .map(|w| (w.name.as_str(), w.delay, w.max_attempts))
        .collect();
    assert_eq!(
        waiters,
        vec![("BucketExists", 5, 20), ("BucketNotExists", 15, 40)]
    );

    let resources = service.resources.as_ref().unwrap();
    assert_eq!(resources.service.actions[0].name, "create_bucket");
    assert_eq!(resources.service.collections[0].name, "buckets");
    let bucket = resources.resource("Bucket").unwrap();
    assert_eq!(bucket.collections[0].resource_type, "Object");
    assert_eq!(bucket.batch_actions[0].request.operation, "DeleteBuckets");
    assert_eq!(bucket.waiters[1].name, "wait_until_not_exists");
}

#[test]
fn test_optional_files_are_optional() {
    let service = loader().load_service("sdb").unwrap();
    assert!(service.paginators.is_empty());
    assert!(service.waiters.is_empty());
    assert!(service.resources.is_none());
    assert_eq!(service.model.metadata.display_name(), "Amazon SimpleDB");
}

#[test]
fn test_resources_need_a_resources_dir() {
    let loader = BotocoreLoader::new(fixtures().join("botocore"));
    assert!(loader.load_service("s3").unwrap().resources.is_none());
}

#[test]
fn test_dangling_reference_fails_to_load() {
    let err = loader().load_service("broken").unwrap_err();
    match err {
        DocgenError::Parse(message) => assert!(message.contains("NotDefined")),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_service() {
    assert!(loader().load_service("nope").is_err());
}

#[test]
fn test_newest_api_version_wins() {
    let temp = TempDir::new().unwrap();
    let sdb = fixtures().join("botocore/sdb/2009-04-15").join(SERVICE_FILE);
    let model = fs::read_to_string(sdb).unwrap();

    let old = temp.path().join("sdb/2007-11-07");
    fs::create_dir_all(&old).unwrap();
    fs::write(old.join(SERVICE_FILE), model.replace("Amazon SimpleDB", "Old SimpleDB")).unwrap();
    let new = temp.path().join("sdb/2009-04-15");
    fs::create_dir_all(&new).unwrap();
    fs::write(new.join(SERVICE_FILE), &model).unwrap();
    // A directory without a model is not a service
    fs::create_dir_all(temp.path().join("_retry")).unwrap();

    let loader = BotocoreLoader::new(temp.path());
    assert_eq!(loader.service_names().unwrap(), vec!["sdb"]);
    let service = loader.load_service("sdb").unwrap();
    assert_eq!(service.model.metadata.service_full_name, "Amazon SimpleDB");
    assert_eq!(service.model.metadata.api_version, "2009-04-15");
}

#[test]
fn test_malformed_paginators_fail_to_load() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("sdb/2009-04-15");
    fs::create_dir_all(&dir).unwrap();
    fs::copy(
        fixtures().join("botocore/sdb/2009-04-15").join(SERVICE_FILE),
        dir.join(SERVICE_FILE),
    )
    .unwrap();
    fs::write(dir.join("paginators-1.json"), "{ not json").unwrap();

    let err = BotocoreLoader::new(temp.path()).load_service("sdb").unwrap_err();
    assert!(err.to_string().contains("paginators"));
}

fn write_gzipped(source: &Path, dest: &Path) {
    let mut encoder = GzEncoder::new(fs::File::create(dest).unwrap(), Compression::default());
    encoder.write_all(&fs::read(source).unwrap()).unwrap();
    encoder.finish().unwrap();
}

#[test]
fn test_gzipped_models_are_loaded() {
    let temp = TempDir::new().unwrap();
    let source = fixtures().join("botocore/s3/2006-03-01");
    let dir = temp.path().join("s3/2006-03-01");
    fs::create_dir_all(&dir).unwrap();
    for file in [SERVICE_FILE, PAGINATORS_FILE, WAITERS_FILE] {
        write_gzipped(&source.join(file), &dir.join(format!("{}{}", file, GZIP_SUFFIX)));
    }

    let loader = BotocoreLoader::new(temp.path());
    assert_eq!(loader.service_names().unwrap(), vec!["s3"]);
    let service = loader.load_service("s3").unwrap();
    assert_eq!(service.model.metadata.display_name(), "Amazon S3");
    assert_eq!(service.model.operations.len(), 6);
    assert_eq!(service.paginators[0].name, "ListObjects");
    assert_eq!(service.waiters.len(), 2);
}

#[test]
fn test_corrupt_gzip_fails_to_load() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("sdb/2009-04-15");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}{}", SERVICE_FILE, GZIP_SUFFIX)), "not gzip").unwrap();

    let err = BotocoreLoader::new(temp.path()).load_service("sdb").unwrap_err();
    assert!(matches!(err, DocgenError::Parse(_)));
}
