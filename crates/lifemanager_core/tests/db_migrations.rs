use lifemanager_core::db::migrations::latest_version;
use lifemanager_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn blob_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(blobs);").unwrap();
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    columns
}

#[test]
fn fresh_store_has_blob_table_at_latest_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(blob_columns(&conn), vec!["key", "payload", "updated_at"]);
}

#[test]
fn blob_rows_are_stamped_on_insert() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO blobs (key, payload) VALUES ('pm_workouts', '[]');",
        [],
    )
    .unwrap();

    let stamped: i64 = conn
        .query_row(
            "SELECT updated_at FROM blobs WHERE key = 'pm_workouts';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(stamped > 0);
}

#[test]
fn reopening_a_store_file_keeps_payloads_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("life.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO blobs (key, payload) VALUES ('pm_tasks', '[]');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    let payload: String = conn
        .query_row("SELECT payload FROM blobs WHERE key = 'pm_tasks';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(payload, "[]");
}

#[test]
fn store_written_by_a_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newer.sqlite3");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 42;")
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 42,
            latest_supported,
        } if latest_supported == latest_version()
    ));
}
