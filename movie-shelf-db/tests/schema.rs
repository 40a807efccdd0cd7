use movie_shelf_db::{StorageHandle, create_schema_if_absent, table_exists};

#[test]
fn creates_file_and_table_on_first_call() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.sqlite");
    let mut handle = StorageHandle::new(&path);

    assert!(create_schema_if_absent(&mut handle).unwrap());
    assert!(path.is_file());
    assert!(!handle.is_open());

    let session = handle.acquire().unwrap();
    assert!(table_exists(&session).unwrap());
}

#[test]
fn second_call_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut handle = StorageHandle::new(dir.path().join("database.sqlite"));

    assert!(create_schema_if_absent(&mut handle).unwrap());
    assert!(!create_schema_if_absent(&mut handle).unwrap());
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("app").join("database.sqlite");
    let mut handle = StorageHandle::new(&path);

    assert!(create_schema_if_absent(&mut handle).unwrap());
    assert!(path.is_file());
}

#[test]
fn expected_columns_exist() {
    let dir = tempfile::tempdir().unwrap();
    let mut handle = StorageHandle::new(dir.path().join("database.sqlite"));
    create_schema_if_absent(&mut handle).unwrap();

    let session = handle.acquire().unwrap();
    let columns = session
        .query(
            "SELECT name, \"notnull\" AS required FROM pragma_table_info('movies') ORDER BY cid",
            [],
            |cursor| {
                let mut columns = Vec::new();
                while let Some(row) = cursor.next_row()? {
                    columns.push((row.text("name")?, row.boolean("required")?));
                }
                Ok(columns)
            },
        )
        .unwrap();

    let expected = [
        ("id", true),
        ("title", true),
        ("category", true),
        ("year", true),
        ("url", false),
        ("cover_url", true),
        ("watched", true),
        ("likes", true),
    ];
    let expected: Vec<(String, bool)> = expected
        .iter()
        .map(|(name, required)| (name.to_string(), *required))
        .collect();
    assert_eq!(columns, expected);
}

#[test]
fn defaults_and_constraints() {
    let dir = tempfile::tempdir().unwrap();
    let mut handle = StorageHandle::new(dir.path().join("database.sqlite"));
    create_schema_if_absent(&mut handle).unwrap();
    let session = handle.acquire().unwrap();

    session
        .execute(
            "INSERT INTO movies (title, category, year, cover_url) VALUES ('Heat', 'Crime', 1995, 'c')",
            [],
        )
        .unwrap();
    let (watched, likes) = session
        .query("SELECT watched, likes FROM movies", [], |cursor| {
            let row = cursor.next_row()?.expect("inserted row");
            Ok((row.boolean("watched")?, row.integer("likes")?))
        })
        .unwrap();
    assert!(!watched);
    assert_eq!(likes, 0);

    assert!(
        session
            .execute(
                "INSERT INTO movies (title, category, year, cover_url) VALUES ('', 'Crime', 1995, 'c')",
                [],
            )
            .is_err()
    );
    assert!(
        session
            .execute(
                "INSERT INTO movies (title, category, year, cover_url) VALUES ('Heat', 'Crime', NULL, 'c')",
                [],
            )
            .is_err()
    );
}
