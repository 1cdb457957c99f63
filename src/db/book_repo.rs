use mysql::params;
use mysql::prelude::Queryable;
use tracing::info;

use crate::db::{Db, DbError};
use crate::domain::book::NewBook;

const INSERT_BOOK: &str = "INSERT INTO cliperest_book
    (user_id, name, slug, rendered, version, category_id, modified, addEnd, coverImage, sharing,
     coverColor, dollarsGiven, privacy, type, created, coverHexColor, numLikers, description,
     tags, thumbnailImage, numClips, numViews, userLanguage, embed_code, thumbnailImageSmall,
     humanModified, coverV3, typeFilters)
    VALUES (:user_id, :name, :slug, :rendered, :version, :category_id, :modified, :add_end,
     :cover_image, :sharing, :cover_color, :dollars_given, :privacy, :book_type, :created,
     :cover_hex_color, :num_likers, :description, :tags, :thumbnail_image, :num_clips,
     :num_views, :user_language, :embed_code, :thumbnail_image_small, :human_modified,
     :cover_v3, :type_filters)";

/// Inserts one `cliperest_book` row and returns its auto-increment id.
pub(crate) fn create_book(db: &mut Db, book: &NewBook) -> Result<u64, DbError> {
    let conn = db.conn_mut()?;
    conn.exec_drop(
        INSERT_BOOK,
        params! {
            "user_id" => book.user_id,
            "name" => book.name.as_str(),
            "slug" => book.slug.as_str(),
            "rendered" => book.rendered,
            "version" => book.version,
            "category_id" => book.category_id,
            "modified" => book.modified.as_str(),
            "add_end" => book.add_end,
            "cover_image" => book.cover_image.as_str(),
            "sharing" => book.sharing,
            "cover_color" => book.cover_color,
            "dollars_given" => book.dollars_given,
            "privacy" => book.privacy,
            "book_type" => book.book_type,
            "created" => book.created.as_str(),
            "cover_hex_color" => book.cover_hex_color.as_str(),
            "num_likers" => book.num_likers,
            "description" => book.description.as_str(),
            "tags" => book.tags.as_str(),
            "thumbnail_image" => book.thumbnail_image.as_str(),
            "num_clips" => book.num_clips,
            "num_views" => book.num_views,
            "user_language" => book.user_language.as_str(),
            "embed_code" => book.embed_code.clone(),
            "thumbnail_image_small" => book.thumbnail_image_small.as_str(),
            "human_modified" => book.human_modified.as_str(),
            "cover_v3" => book.cover_v3,
            "type_filters" => book.type_filters.as_str(),
        },
    )
    .map_err(DbError::Query)?;

    let book_id = conn.last_insert_id();
    info!(book_id, "book record inserted");
    Ok(book_id)
}
