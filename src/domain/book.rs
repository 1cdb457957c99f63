use chrono::{DateTime, Local};

use crate::format::{display_datetime, mysql_datetime, slug_fragment};

const SEED_USER_ID: i64 = 221;
const SEED_CATEGORY_ID: i64 = 19;
const SEED_NAME: &str = "DeannaBanana";
const SEED_SLUG_PREFIX: &str = "deanna-banana-";
const SEED_DESCRIPTION: &str = "Virtual Try On";
const SEED_LOGO_URL: &str = "https://www.deanna2u.com/img/Logo_H_blanco.png";

/// One `cliperest_book` row. Field order mirrors the table's column list,
/// but values bind by name, so reordering is harmless.
#[derive(Clone, Debug)]
pub(crate) struct NewBook {
    pub(crate) user_id: i64,
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) rendered: i64,
    pub(crate) version: i64,
    pub(crate) category_id: i64,
    pub(crate) modified: String,
    pub(crate) add_end: i64,
    pub(crate) cover_image: String,
    pub(crate) sharing: i64,
    pub(crate) cover_color: i64,
    pub(crate) dollars_given: i64,
    pub(crate) privacy: i64,
    pub(crate) book_type: i64,
    pub(crate) created: String,
    pub(crate) cover_hex_color: String,
    pub(crate) num_likers: i64,
    pub(crate) description: String,
    pub(crate) tags: String,
    pub(crate) thumbnail_image: String,
    pub(crate) num_clips: i64,
    pub(crate) num_views: i64,
    pub(crate) user_language: String,
    pub(crate) embed_code: Option<String>,
    pub(crate) thumbnail_image_small: String,
    pub(crate) human_modified: String,
    pub(crate) cover_v3: i64,
    pub(crate) type_filters: String,
}

impl NewBook {
    /// The sample book the `seed` command inserts, timestamped at `now`.
    pub(crate) fn sample(now: &DateTime<Local>) -> Self {
        let stamp = mysql_datetime(now);
        Self {
            user_id: SEED_USER_ID,
            name: format!("{SEED_NAME} {}", display_datetime(now)),
            slug: format!("{SEED_SLUG_PREFIX}{}", slug_fragment(now)),
            rendered: 0,
            version: 1,
            category_id: SEED_CATEGORY_ID,
            modified: stamp.clone(),
            add_end: 1,
            cover_image: SEED_LOGO_URL.to_string(),
            sharing: 0,
            cover_color: 2,
            dollars_given: 0,
            privacy: 0,
            book_type: 0,
            created: stamp.clone(),
            cover_hex_color: "#336699".to_string(),
            num_likers: 0,
            description: format!("{SEED_DESCRIPTION} {}", display_datetime(now)),
            tags: String::new(),
            thumbnail_image: SEED_LOGO_URL.to_string(),
            num_clips: 1,
            num_views: 0,
            user_language: "es-ES".to_string(),
            embed_code: None,
            thumbnail_image_small: SEED_LOGO_URL.to_string(),
            human_modified: stamp,
            cover_v3: 1,
            type_filters: "a:0:{}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sample_book_carries_the_seed_timestamps() {
        let now = Local.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap();
        let book = NewBook::sample(&now);
        assert_eq!(book.name, "DeannaBanana 30/08/2026 09:30");
        assert_eq!(book.slug, "deanna-banana-30-08-2026_09-30");
        assert_eq!(book.created, "2026-08-30 09:30");
        assert_eq!(book.created, book.modified);
        assert_eq!(book.created, book.human_modified);
        assert_eq!(book.embed_code, None);
        assert_eq!(book.num_clips, 1);
    }
}
