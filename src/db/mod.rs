pub mod migrations;
pub mod repository;

#[cfg(test)]
pub fn open_test_db() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    migrations::run_migrations(&conn).unwrap();
    conn
}
