/* tests/loader_tests.rs */

#![cfg(all(feature = "loader", feature = "json", feature = "toml"))]

use confmgr::loader::{DynLoader, FmtError, LoadResult, MemorySource, format::AnyFormat};
use confmgr::{BuildError, ConfigEntry, Registry};

fn manager() -> ConfigEntry {
	ConfigEntry::new("B")
		.arg("arg2", "name")
		.arg("arg1", ConfigEntry::new("A").arg("arg", 1))
}

#[tokio::test]
async fn test_dyn_loader_json() {
	let mut source = MemorySource::new();
	source.insert(
		"test.json",
		br#"{"name": "A", "arguments": {"arg": 1}}"#.to_vec(),
	);

	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Json)
		.build()
		.unwrap();

	let res = loader.load("test").await;
	match res {
		LoadResult::Ok { value, info } => {
			assert_eq!(value, ConfigEntry::new("A").arg("arg", 1));
			assert_eq!(info.format, "json");
		}
		_ => panic!("Load failed"),
	}
}

#[tokio::test]
async fn test_dyn_loader_not_found() {
	let source = MemorySource::new();
	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Json)
		.build()
		.unwrap();

	let res = loader.load("missing").await;
	match res {
		LoadResult::NotFound => (),
		_ => panic!("Expected NotFound"),
	}
}

#[tokio::test]
async fn test_probe_order_follows_registration() {
	let mut source = MemorySource::new();
	source.insert("app.json", br#"{"name": "FromJson"}"#.to_vec());
	source.insert("app.toml", b"name = \"FromToml\"".to_vec());

	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Toml)
		.format(AnyFormat::Json)
		.build()
		.unwrap();

	let (entry, info) = loader.load("app").await.into_result().unwrap();
	assert_eq!(entry.name(), "FromToml");
	assert_eq!(info.format, "toml");
}

#[tokio::test]
async fn test_load_file_by_extension() {
	let mut source = MemorySource::new();
	source.insert("a.toml", b"name = \"A\"\n[arguments]\narg = 1\n".to_vec());
	source.insert("noext", b"{}".to_vec());
	source.insert("a.xml", b"<A/>".to_vec());

	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Json)
		.format(AnyFormat::Toml)
		.build()
		.unwrap();

	assert!(loader.load_file("a.toml").await.is_ok());
	assert!(matches!(loader.load_file("a.xml").await, LoadResult::NotFound));
	assert!(matches!(
		loader.load_file("noext").await,
		LoadResult::Invalid(FmtError::ParseError(_))
	));
}

#[tokio::test]
async fn test_malformed_file_is_invalid() {
	let mut source = MemorySource::new();
	source.insert("bad.json", br#"{"name": "A", "arguments": {"d": {"first": 1}}}"#.to_vec());

	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Json)
		.build()
		.unwrap();

	assert!(matches!(
		loader.load_file("bad.json").await,
		LoadResult::Invalid(FmtError::ParseError(_))
	));
}

#[tokio::test]
async fn test_save_then_load_matches() {
	let loader = DynLoader::builder()
		.source(MemorySource::new())
		.all_formats()
		.build()
		.unwrap();

	let original = manager();
	for path in ["saved.json", "saved.toml"] {
		let info = loader.save(path, &original).await.unwrap();
		assert_eq!(info.path.to_str(), Some(path));

		let (read, _) = loader.load_file(path).await.into_result().unwrap();
		let matches = confmgr::find_matches(&original, std::slice::from_ref(&read), &Default::default());
		assert_eq!(matches.len(), 1, "round trip through {}", path);
	}
}

#[tokio::test]
async fn test_save_unknown_extension() {
	let loader = DynLoader::builder()
		.source(MemorySource::new())
		.format(AnyFormat::Json)
		.build()
		.unwrap();

	let err = loader.save("out.xml", &manager()).await.unwrap_err();
	assert!(matches!(err, FmtError::Custom(_)));
}

#[tokio::test]
async fn test_registry_rejects_unknown_constructor() {
	let registry = Registry::new()
		.with("A", |args| args.get::<i64>("arg"))
		.with("B", |args| args.get::<String>("arg2"));

	let mut source = MemorySource::new();
	source.insert(
		"known.json",
		br#"{"name": "B", "arguments": {"arg1": {"name": "A", "arguments": {"arg": 1}}}}"#.to_vec(),
	);
	source.insert(
		"unknown.json",
		br#"{"name": "B", "arguments": {"arg1": {"name": "Gone"}}}"#.to_vec(),
	);

	let loader = DynLoader::builder()
		.source(source)
		.format(AnyFormat::Json)
		.registry(registry)
		.build()
		.unwrap();

	assert!(loader.load_file("known.json").await.is_ok());
	match loader.load_file("unknown.json").await {
		LoadResult::Invalid(FmtError::Constructor(BuildError::UnknownConstructor { name })) => {
			assert_eq!(name, "Gone")
		}
		other => panic!("Expected unknown constructor, got {:?}", other),
	}
}

#[test]
fn test_builder_requires_source_and_format() {
	assert!(DynLoader::builder().format(AnyFormat::Json).build().is_err());
	assert!(DynLoader::builder().source(MemorySource::new()).build().is_err());
}
