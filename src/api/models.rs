use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Episode record as served by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EpisodeRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub members: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file: EpisodeFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EpisodeFile {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub duration: u32,
}

/// Episode as the app consumes it: wire fields mapped and display labels
/// precomputed, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub member: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    pub duration: u32,
    pub duration_label: String,
    pub url: String,
}

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        let duration = record.file.duration;
        Self {
            id: record.id,
            title: record.title,
            member: record.members,
            thumbnail: record.thumbnail,
            description: record.description,
            published_at: format_published_at(&record.published_at),
            duration,
            duration_label: format_duration(duration),
            url: record.file.url,
        }
    }
}

pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

fn parse_published_at(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Publication date as shown in episode lists, e.g. `8 Jan 21`.
/// Unparseable input is shown as-is rather than dropped.
pub fn format_published_at(value: &str) -> String {
    match parse_published_at(value) {
        Some(parsed) => parsed.format("%-d %b %y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_pads_all_units() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(61), "00:01:01");
        assert_eq!(format_duration(3725), "01:02:05");
    }

    #[test]
    fn duration_rolls_minutes_into_hours() {
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(7325), "02:02:05");
    }

    #[test]
    fn published_at_accepts_rfc3339() {
        assert_eq!(format_published_at("2021-01-22T17:33:52.000Z"), "22 Jan 21");
    }

    #[test]
    fn published_at_accepts_plain_timestamps_and_dates() {
        assert_eq!(format_published_at("2021-02-10 09:15:00"), "10 Feb 21");
        assert_eq!(format_published_at("2021-03-05"), "5 Mar 21");
    }

    #[test]
    fn published_at_passes_garbage_through() {
        assert_eq!(format_published_at("someday"), "someday");
    }

    #[test]
    fn record_maps_into_episode() {
        let raw = r#"{
            "id": "open-source-maintainers-roundtable",
            "title": "Open source maintainers roundtable",
            "members": "Ana Costa, Leo Martins",
            "published_at": "2021-01-22T17:33:52.000Z",
            "thumbnail": "https://example.com/thumbnails/roundtable.jpg",
            "description": "<p>What it takes to keep a project alive.</p>",
            "file": {
                "url": "https://example.com/audio/roundtable.mp3",
                "type": "audio/mpeg",
                "duration": 3981
            }
        }"#;

        let record: EpisodeRecord = serde_json::from_str(raw).unwrap();
        let episode = Episode::from(record);

        assert_eq!(episode.id, "open-source-maintainers-roundtable");
        assert_eq!(episode.member, "Ana Costa, Leo Martins");
        assert_eq!(episode.published_at, "22 Jan 21");
        assert_eq!(episode.duration, 3981);
        assert_eq!(episode.duration_label, "01:06:21");
        assert_eq!(episode.url, "https://example.com/audio/roundtable.mp3");
    }

    #[test]
    fn missing_wire_fields_default() {
        let record: EpisodeRecord = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        let episode = Episode::from(record);

        assert_eq!(episode.id, "bare");
        assert!(episode.url.is_empty());
        assert_eq!(episode.duration_label, "00:00:00");
    }
}
