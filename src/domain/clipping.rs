use chrono::{DateTime, Local};

use crate::format::mysql_datetime;

const SEED_THUMBNAIL_URL: &str =
    "https://www.gstatic.com/lamda/images/gemini_aurora_thumbnail_4g_e74822ff0ca4259beb718.png";

/// One `cliperest_clipping` row, belonging to exactly one book.
#[derive(Clone, Debug)]
pub(crate) struct NewClipping {
    pub(crate) book_id: u64,
    pub(crate) caption: String,
    pub(crate) text: String,
    pub(crate) thumbnail: String,
    pub(crate) use_thumbnail: i64,
    pub(crate) clip_type: i64,
    pub(crate) url: String,
    pub(crate) created: String,
    pub(crate) num: i64,
    pub(crate) migrated_s3: i64,
    pub(crate) modified: String,
}

impl NewClipping {
    /// The sample clipping the `seed` command attaches to a freshly
    /// inserted book.
    pub(crate) fn sample(book_id: u64, now: &DateTime<Local>) -> Self {
        let stamp = mysql_datetime(now);
        Self {
            book_id,
            caption: "Hello".to_string(),
            text: String::new(),
            thumbnail: SEED_THUMBNAIL_URL.to_string(),
            use_thumbnail: 1,
            clip_type: 1,
            url: SEED_THUMBNAIL_URL.to_string(),
            created: stamp.clone(),
            num: 1,
            migrated_s3: 0,
            modified: stamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sample_clipping_references_the_given_book() {
        let now = Local.with_ymd_and_hms(2026, 8, 30, 9, 30, 0).unwrap();
        let clipping = NewClipping::sample(42, &now);
        assert_eq!(clipping.book_id, 42);
        assert_eq!(clipping.caption, "Hello");
        assert_eq!(clipping.created, "2026-08-30 09:30");
        assert_eq!(clipping.created, clipping.modified);
    }
}
