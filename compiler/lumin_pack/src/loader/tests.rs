use super::*;
use pretty_assertions::assert_eq;

#[test]
fn normalize_drops_cur_dir() {
    assert_eq!(normalize_path(Path::new("./a/./b.lua")), PathBuf::from("a/b.lua"));
}

#[test]
fn normalize_resolves_parent_dir() {
    assert_eq!(normalize_path(Path::new("a/b/../c.lua")), PathBuf::from("a/c.lua"));
}

#[test]
fn normalize_keeps_leading_parent_dir() {
    assert_eq!(normalize_path(Path::new("../x.lua")), PathBuf::from("../x.lua"));
    assert_eq!(normalize_path(Path::new("a/../../x")), PathBuf::from("../x"));
}

#[test]
fn memory_loader_matches_normalized_paths() {
    let loader = MemoryLoader::new().with_file("./lib/util.lua", "return 1");
    assert_eq!(loader.load_text(Path::new("lib/util.lua")).unwrap(), "return 1");
    assert_eq!(loader.len(), 1);
}

#[test]
fn memory_loader_missing_file_is_not_found() {
    let loader = MemoryLoader::new();
    assert!(loader.is_empty());
    let err = loader.load(Path::new("nope.lua")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn load_text_rejects_invalid_utf8() {
    let loader = MemoryLoader::new().with_file("bin.dat", vec![0xff, 0xfe]);
    let err = loader.load_text(Path::new("bin.dat")).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(loader.load(Path::new("bin.dat")).unwrap(), vec![0xff, 0xfe]);
}
