use mysql::params;
use mysql::prelude::Queryable;
use tracing::info;

use crate::db::{Db, DbError};
use crate::domain::clipping::NewClipping;

const INSERT_CLIPPING: &str = "INSERT INTO cliperest_clipping
    (book_id, caption, text, thumbnail, useThumbnail, type, url, created, num, migratedS3, modified)
    VALUES (:book_id, :caption, :text, :thumbnail, :use_thumbnail, :clip_type, :url, :created,
     :num, :migrated_s3, :modified)";

/// Inserts one `cliperest_clipping` row and returns its auto-increment id.
/// `book_id` is forwarded as-is; whether the schema enforces it is an
/// environment-specific fact.
pub(crate) fn create_clipping(db: &mut Db, clipping: &NewClipping) -> Result<u64, DbError> {
    let conn = db.conn_mut()?;
    conn.exec_drop(
        INSERT_CLIPPING,
        params! {
            "book_id" => clipping.book_id,
            "caption" => clipping.caption.as_str(),
            "text" => clipping.text.as_str(),
            "thumbnail" => clipping.thumbnail.as_str(),
            "use_thumbnail" => clipping.use_thumbnail,
            "clip_type" => clipping.clip_type,
            "url" => clipping.url.as_str(),
            "created" => clipping.created.as_str(),
            "num" => clipping.num,
            "migrated_s3" => clipping.migrated_s3,
            "modified" => clipping.modified.as_str(),
        },
    )
    .map_err(DbError::Query)?;

    let clipping_id = conn.last_insert_id();
    info!(clipping_id, "clipping record inserted");
    Ok(clipping_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_statement_binds_all_columns() {
        assert_eq!(INSERT_CLIPPING.matches(':').count(), 11);
    }
}
