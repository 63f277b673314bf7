use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn render_paths_layout() {
    let p = RenderPaths::new("/srv/puls");
    assert_eq!(p.templates_dir(), Path::new("/srv/puls/assets/templates"));
    assert_eq!(p.dir_for(AssetKind::Logo), Path::new("/srv/puls/assets/logos"));
    assert_eq!(p.fonts_dir(), Path::new("/srv/puls/assets/fonts"));
    assert_eq!(p.output_dir(), Path::new("/srv/puls/output"));
}

#[test]
fn dir_assets_missing_is_none_present_is_some() {
    let dir = tempfile::tempdir().unwrap();
    let paths = RenderPaths::new(dir.path());
    std::fs::create_dir_all(paths.logos_dir()).unwrap();
    std::fs::write(paths.logos_dir().join("falken.png"), b"png").unwrap();

    let assets = DirAssets::new(paths);
    assert_eq!(
        assets.read(AssetKind::Logo, "falken.png").unwrap().as_deref(),
        Some(&b"png"[..])
    );
    assert!(assets.read(AssetKind::Logo, "adler.png").unwrap().is_none());
    assert!(assets.read(AssetKind::Template, "falken.png").unwrap().is_none());
    assert!(assets.read(AssetKind::Logo, "../falken.png").is_err());
}

#[test]
fn in_memory_assets_are_keyed_by_kind() {
    let assets = InMemoryAssets::new()
        .with(AssetKind::Font, "a.ttf", vec![1, 2, 3])
        .unwrap();
    assert_eq!(
        assets.read(AssetKind::Font, "./a.ttf").unwrap(),
        Some(vec![1, 2, 3])
    );
    assert!(assets.read(AssetKind::Logo, "a.ttf").unwrap().is_none());
}
