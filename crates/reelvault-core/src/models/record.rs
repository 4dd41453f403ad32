use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A metadata record that media assets are attached to.
///
/// `thumbnail_url` and `video_url` are locators: URL strings resolving to
/// the current bytes of the attached asset, or `None` when nothing has been
/// uploaded yet. `updated_at` advances on every successful locator swap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(owner_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Record {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Swap the thumbnail locator, advancing `updated_at`.
    pub fn set_thumbnail_url(&mut self, url: String) {
        self.thumbnail_url = Some(url);
        self.updated_at = Utc::now();
    }

    /// Swap the video locator, advancing `updated_at`.
    pub fn set_video_url(&mut self, url: String) {
        self.video_url = Some(url);
        self.updated_at = Utc::now();
    }
}

/// Serialized API shape of a [`Record`].
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        RecordResponse {
            id: record.id,
            owner_id: record.owner_id,
            title: record.title,
            description: record.description,
            thumbnail_url: record.thumbnail_url,
            video_url: record.video_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_swap_advances_updated_at() {
        let mut record = Record::new(Uuid::new_v4(), "clip".into(), "".into());
        let before = record.updated_at;
        record.set_thumbnail_url("http://localhost:8091/assets/abc.png".into());
        assert!(record.updated_at >= before);
        assert!(record.thumbnail_url.is_some());
        assert!(record.video_url.is_none());
    }
}
