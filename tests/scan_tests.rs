/* tests/scan_tests.rs */

#![cfg(all(feature = "scan", feature = "json", feature = "toml"))]

use confmgr::loader::{DynLoader, FileSource, format::AnyFormat};
use confmgr::scan::{ConfigDir, ScanError, ScanMode};
use confmgr::{ConfigEntry, SkipSpec, partition_duplicates};

fn loader(root: &std::path::Path) -> DynLoader {
	DynLoader::builder()
		.source(FileSource::new(root))
		.format(AnyFormat::Json)
		.format(AnyFormat::Toml)
		.build()
		.unwrap()
}

async fn write(root: &std::path::Path, rel: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(rel);
	if let Some(parent) = path.parent() {
		tokio::fs::create_dir_all(parent).await?;
	}
	tokio::fs::write(path, content).await
}

#[tokio::test]
async fn test_scan_recursive_sorted() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path();

	write(root, "b.json", r#"{"name": "Foo", "arguments": {"x": 1}}"#).await?;
	write(root, "a.toml", "name = \"Foo\"\n[arguments]\nx = 1\n").await?;
	write(root, "nested/c.json", r#"{"name": "Foo", "arguments": {"x": 2}}"#).await?;
	write(root, ".hidden/d.json", r#"{"name": "Foo"}"#).await?;
	write(root, ".e.json", r#"{"name": "Foo"}"#).await?;
	write(root, "notes.txt", "not a configuration").await?;

	let result = ConfigDir::new(loader(root), root).load().await?;

	assert_eq!(result.keys().collect::<Vec<_>>(), vec!["a.toml", "b.json", "nested/c.json"]);
	assert_eq!(result.ignored, vec!["notes.txt".to_string()]);
	assert!(result.is_clean());

	let groups = partition_duplicates(&result.loaded, &SkipSpec::new());
	assert_eq!(groups.len(), 2);
	assert_eq!(groups[0].ids, vec!["a.toml", "b.json"]);
	assert_eq!(groups[1].ids, vec!["nested/c.json"]);

	Ok(())
}

#[tokio::test]
async fn test_scan_flat_with_pattern() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path();

	write(root, "conf_1.json", r#"{"name": "A"}"#).await?;
	write(root, "conf_2.toml", "name = \"A\"").await?;
	write(root, "other.json", r#"{"name": "A"}"#).await?;
	write(root, "sub/conf_3.json", r#"{"name": "A"}"#).await?;

	let config_dir = ConfigDir::builder()
		.loader(loader(root))
		.path(root)
		.pattern(r"conf_[0-9]+\.")
		.scan_mode(ScanMode::Flat)
		.build()?;

	let result = config_dir.load().await?;
	assert_eq!(result.keys().collect::<Vec<_>>(), vec!["conf_1.json", "conf_2.toml"]);

	Ok(())
}

#[tokio::test]
async fn test_scan_reports_failures() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path();

	write(root, "good.json", r#"{"name": "A"}"#).await?;
	write(root, "bad.json", r#"{"arguments": {}}"#).await?;

	let result = ConfigDir::new(loader(root), root).load().await?;

	assert_eq!(result.keys().collect::<Vec<_>>(), vec!["good.json"]);
	assert_eq!(result.failed.len(), 1);
	assert_eq!(result.failed[0].0, "bad.json");
	assert!(!result.is_clean());

	Ok(())
}

#[tokio::test]
async fn test_scan_limit() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path();

	for i in 0..3 {
		write(root, &format!("c{}.json", i), r#"{"name": "A"}"#).await?;
	}

	let config_dir = ConfigDir::builder()
		.loader(loader(root))
		.path(root)
		.max_entries(2)
		.build()?;

	assert!(matches!(config_dir.load().await, Err(ScanError::LimitExceeded(_))));

	Ok(())
}

#[tokio::test]
async fn test_scan_missing_directory_is_empty() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let missing = dir.path().join("missing");

	let result = ConfigDir::new(loader(dir.path()), &missing).load().await?;
	assert!(result.loaded.is_empty());

	Ok(())
}

#[tokio::test]
async fn test_file_source_round_trip() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let loader = loader(dir.path());

	let entry = ConfigEntry::new("B")
		.arg("arg2", "name")
		.arg("arg1", ConfigEntry::new("A").arg("arg", 1));

	loader.save("out/saved.toml", &entry).await?;
	let (read, _) = loader.load_file("out/saved.toml").await.into_result()?;
	assert_eq!(read, entry);

	assert!(loader.save("../escape.json", &entry).await.is_err());

	Ok(())
}

#[test]
fn test_builder_validation() {
	assert!(matches!(ConfigDir::builder().path(".").build(), Err(ScanError::Builder(_))));
	let dir = tempfile::tempdir().unwrap();
	assert!(matches!(
		ConfigDir::builder()
			.loader(loader(dir.path()))
			.path(dir.path())
			.pattern("(")
			.build(),
		Err(ScanError::Pattern(_))
	));
}
