use super::*;

#[test]
fn builtin_dino_loads_with_derived_bounds() {
    let ds = DataLoader::load(&DataSource::Builtin("dino".into()), None, None).unwrap();
    assert_eq!(ds.name, "dino");
    assert_eq!(ds.len(), 142);
    for p in &ds.points {
        assert!(ds.bounds.contains(*p));
    }
}

#[test]
fn unknown_builtin_is_a_dataset_error() {
    let err = DataLoader::load(&DataSource::Builtin("brontosaurus".into()), None, None)
        .unwrap_err();
    assert!(err.to_string().contains("unknown start shape 'brontosaurus'"));
}

#[test]
fn explicit_bounds_must_contain_the_data() {
    let err = DataLoader::load(
        &DataSource::Builtin("dino".into()),
        Some((0.0, 1.0)),
        Some((0.0, 1.0)),
    )
    .unwrap_err();
    assert!(err.to_string().contains("outside bounds"));
}

#[test]
fn explicit_bounds_are_applied_verbatim() {
    let ds = DataLoader::load(
        &DataSource::Builtin("dino".into()),
        Some((0.0, 120.0)),
        Some((-10.0, 110.0)),
    )
    .unwrap();
    assert_eq!(ds.bounds, Bounds::new(0.0, 120.0, -10.0, 110.0).unwrap());
}

#[test]
fn point_file_loads_with_file_stem_as_name() {
    let dir = std::path::PathBuf::from("target").join("loader_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("triangle.json");
    std::fs::write(&path, "[[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]").unwrap();

    let ds = DataLoader::load(&DataSource::File(path), None, None).unwrap();
    assert_eq!(ds.name, "triangle");
    assert_eq!(ds.len(), 3);
}

#[test]
fn malformed_point_file_is_a_serde_error() {
    let dir = std::path::PathBuf::from("target").join("loader_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.json");
    std::fs::write(&path, "{\"not\": \"points\"}").unwrap();

    let err = DataLoader::load(&DataSource::File(path), None, None).unwrap_err();
    assert!(matches!(err, MorphError::Serde(_)));
}

#[test]
fn resolve_prefers_existing_paths() {
    assert_eq!(
        DataSource::resolve("Cargo.toml"),
        DataSource::File("Cargo.toml".into())
    );
    assert_eq!(
        DataSource::resolve("dino"),
        DataSource::Builtin("dino".into())
    );
}

#[test]
fn single_point_file_is_rejected() {
    let dir = std::path::PathBuf::from("target").join("loader_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("lonely.json");
    std::fs::write(&path, "[[1.0, 1.0]]").unwrap();

    let err = DataLoader::load(&DataSource::File(path), None, None).unwrap_err();
    assert!(err.to_string().contains("at least 2 points"));
}
