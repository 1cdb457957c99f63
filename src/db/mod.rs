use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder, Params, Value};
use tracing::{debug, info};

mod book_repo;
mod clipping_repo;
mod error;

pub(crate) use book_repo::create_book;
pub(crate) use clipping_repo::create_clipping;
pub(crate) use error::DbError;

use crate::config::DbConfig;

/// One row of a read statement: column name/value pairs in result-set order.
pub(crate) type QueryRow = Vec<(String, Value)>;

pub(crate) enum QueryOutcome {
    Rows(Vec<QueryRow>),
    Affected(u64),
}

/// Holds at most one live MySQL session. Queries require an explicit
/// `connect`; dropping the wrapper releases any open connection.
pub(crate) struct Db {
    config: DbConfig,
    conn: Option<Conn>,
}

impl Db {
    pub(crate) fn new(config: DbConfig) -> Self {
        Self { config, conn: None }
    }

    pub(crate) fn connect(&mut self) -> Result<(), DbError> {
        let opts = OptsBuilder::new()
            .ip_or_hostname(Some(self.config.host.as_str()))
            .tcp_port(self.config.port)
            .user(Some(self.config.username.as_str()))
            .pass(Some(self.config.password.as_str()))
            .db_name(Some(self.config.database.as_str()));
        let conn = Conn::new(opts).map_err(DbError::Connection)?;
        info!(
            host = %self.config.host,
            database = %self.config.database,
            "connected to the database"
        );
        self.conn = Some(conn);
        Ok(())
    }

    pub(crate) fn disconnect(&mut self) {
        if self.conn.take().is_some() {
            info!("disconnected from the database");
        } else {
            debug!("disconnect requested without an active connection");
        }
    }

    /// Reports whether a handle is held. Does not probe server liveness.
    pub(crate) fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Runs one statement. SELECT/SHOW/DESCRIBE return the full result set;
    /// anything else is committed immediately (server-side autocommit) and
    /// yields the affected-row count.
    pub(crate) fn execute_query(
        &mut self,
        sql: &str,
        params: Params,
    ) -> Result<QueryOutcome, DbError> {
        let conn = self.conn_mut()?;
        if is_read_statement(sql) {
            let rows: Vec<mysql::Row> = match params {
                Params::Empty => conn.query(sql),
                params => conn.exec(sql, params),
            }
            .map_err(DbError::Query)?;
            Ok(QueryOutcome::Rows(
                rows.into_iter().map(row_to_fields).collect(),
            ))
        } else {
            match params {
                Params::Empty => conn.query_drop(sql),
                params => conn.exec_drop(sql, params),
            }
            .map_err(DbError::Query)?;
            Ok(QueryOutcome::Affected(conn.affected_rows()))
        }
    }

    fn conn_mut(&mut self) -> Result<&mut Conn, DbError> {
        self.conn.as_mut().ok_or(DbError::NotConnected)
    }
}

fn row_to_fields(row: mysql::Row) -> QueryRow {
    let names: Vec<String> = row
        .columns_ref()
        .iter()
        .map(|column| column.name_str().into_owned())
        .collect();
    names.into_iter().zip(row.unwrap()).collect()
}

fn is_read_statement(sql: &str) -> bool {
    let keyword = sql
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();
    matches!(keyword.as_str(), "SELECT" | "SHOW" | "DESCRIBE")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PORT, DbConfig};
    use crate::domain::{book::NewBook, clipping::NewClipping};

    fn unconnected_db() -> Db {
        Db::new(DbConfig {
            host: "localhost".into(),
            port: DEFAULT_PORT,
            username: "t".into(),
            password: "t".into(),
            database: "testdb".into(),
        })
    }

    #[test]
    fn classifies_read_statements() {
        assert!(is_read_statement("SELECT * FROM cliperest_book"));
        assert!(is_read_statement("  select 1"));
        assert!(is_read_statement("show tables"));
        assert!(is_read_statement("DESCRIBE cliperest_clipping"));
    }

    #[test]
    fn classifies_write_statements() {
        assert!(!is_read_statement("INSERT INTO t VALUES (1)"));
        assert!(!is_read_statement("update t set a = 1"));
        assert!(!is_read_statement("DELETE FROM t"));
        assert!(!is_read_statement(""));
    }

    #[test]
    fn query_operations_require_a_connection() {
        let mut db = unconnected_db();
        assert!(!db.is_connected());
        assert!(matches!(
            db.execute_query("SELECT 1", Params::Empty),
            Err(DbError::NotConnected)
        ));

        let now = chrono::Local::now();
        assert!(matches!(
            create_book(&mut db, &NewBook::sample(&now)),
            Err(DbError::NotConnected)
        ));
        assert!(matches!(
            create_clipping(&mut db, &NewClipping::sample(1, &now)),
            Err(DbError::NotConnected)
        ));
    }

    #[test]
    fn disconnect_without_a_connection_is_a_no_op() {
        let mut db = unconnected_db();
        db.disconnect();
        assert!(!db.is_connected());
    }

    // Exercises the full wrapper against a real server. Runs only when the
    // DB_* environment points at one; otherwise it skips.
    #[test]
    fn live_server_round_trip() {
        let Ok(config) = DbConfig::from_env() else {
            eprintln!("skipping live_server_round_trip: DB_* environment not configured");
            return;
        };
        let mut db = Db::new(config);
        if let Err(err) = db.connect() {
            eprintln!("skipping live_server_round_trip: {err}");
            return;
        }
        assert!(db.is_connected());

        let outcome = db
            .execute_query("SELECT * FROM cliperest_book WHERE id < 0", Params::Empty)
            .expect("select should succeed");
        match outcome {
            QueryOutcome::Rows(rows) => assert!(rows.is_empty()),
            QueryOutcome::Affected(_) => panic!("SELECT must return rows"),
        }

        let now = chrono::Local::now();
        let first = create_book(&mut db, &NewBook::sample(&now)).expect("first insert");
        let second = create_book(&mut db, &NewBook::sample(&now)).expect("second insert");
        assert!(first > 0);
        assert!(second > first, "auto-increment ids must be monotonic");

        let clipping_id =
            create_clipping(&mut db, &NewClipping::sample(second, &now)).expect("clipping insert");
        assert!(clipping_id > 0);

        // Referential integrity is schema-dependent; record what this
        // server does rather than asserting either way.
        match create_clipping(&mut db, &NewClipping::sample(u64::MAX, &now)) {
            Ok(id) => eprintln!("schema does not enforce book_id (inserted clipping {id})"),
            Err(err) => eprintln!("schema rejects dangling book_id: {err}"),
        }

        db.disconnect();
        assert!(!db.is_connected());
    }
}
