//! Unit tests for database key and record types

#[cfg(test)]
mod tests {
    use crate::catalog::{Tag, TagType};
    use crate::db::error::DbError;
    use crate::db::types::{SongRecord, UrlKey};

    #[test]
    fn test_url_key_accepts_relative_paths() {
        for url in ["a.mp3", "rock/a.mp3", "rock/live/2001 - intro.flac", "dir.with.dots/x"] {
            let key = UrlKey::new(url).unwrap();
            assert_eq!(&*key, url);
        }
    }

    #[test]
    fn test_url_key_rejects_bad_urls() {
        for url in ["", "/abs.mp3", "trailing/", "a//b.mp3", "./a.mp3", "a/../b.mp3", "a\nb"] {
            assert!(
                matches!(UrlKey::new(url), Err(DbError::InvalidUrl(ref u)) if u == url),
                "expected {url:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_url_key_bytes() {
        let key = UrlKey::new("rock/a.mp3").unwrap();
        let restored = UrlKey::from_bytes(key.as_bytes()).unwrap();
        assert_eq!(restored, key);
    }

    #[test]
    fn test_url_key_from_invalid_utf8() {
        let result = UrlKey::from_bytes(&[0xC3, 0x28]);
        assert!(matches!(result, Err(DbError::SerializeError(_))));
    }

    #[test]
    fn test_song_record_keeps_tag_order_and_duration() {
        let tag = Tag::new()
            .with(TagType::Artist, "B")
            .with(TagType::Artist, "A")
            .with_duration(42);
        let record = SongRecord(Some(tag.clone()));

        let decoded = SongRecord::decode(&record.encode().unwrap()).unwrap();
        assert_eq!(decoded.0, Some(tag));
    }

    #[test]
    fn test_song_record_without_tag() {
        let decoded = SongRecord::decode(&SongRecord(None).encode().unwrap()).unwrap();
        assert_eq!(decoded, SongRecord(None));
    }

    #[test]
    fn test_into_song() {
        let key = UrlKey::new("x/y.mp3").unwrap();
        let song = SongRecord(None).into_song(key);
        assert_eq!(song.url, "x/y.mp3");
        assert!(song.tag.is_none());
    }
}
