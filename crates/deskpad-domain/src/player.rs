//! Music player control surface.
//!
//! Actual playback belongs to external media machinery; this store
//! models the source slot, the transport state, and the playhead
//! position advanced by the shared 1-second tick.

use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::timer::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Local audio file.
    File(PathBuf),
    /// Extracted 11-character video id from a pasted link.
    Video(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Default)]
pub struct Player {
    source: Option<Source>,
    status: PlayerStatus,
    position_ms: u64,
}

/// Pull the 11-character video id out of a pasted URL, accepting the
/// `v=`, `youtu.be/`, and `embed/` forms.
pub fn extract_video_id(url: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"(?:v=|youtu\.be/|embed/)([\w-]{11})").expect("video id pattern is valid")
    });
    pattern.captures(url).map(|caps| caps[1].to_string())
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    /// Load a local file, displacing any video source and stopping.
    pub fn load_file(&mut self, path: PathBuf) {
        self.source = Some(Source::File(path));
        self.status = PlayerStatus::Stopped;
        self.position_ms = 0;
    }

    /// Load a pasted video link. Returns false (leaving state untouched)
    /// when no video id can be extracted.
    pub fn load_video_url(&mut self, url: &str) -> bool {
        match extract_video_id(url) {
            Some(id) => {
                self.source = Some(Source::Video(id));
                self.status = PlayerStatus::Stopped;
                self.position_ms = 0;
                true
            }
            None => false,
        }
    }

    pub fn play(&mut self) {
        if self.source.is_some() {
            self.status = PlayerStatus::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.status == PlayerStatus::Playing {
            self.status = PlayerStatus::Paused;
        }
    }

    /// Stop and rewind the playhead.
    pub fn stop(&mut self) {
        self.status = PlayerStatus::Stopped;
        self.position_ms = 0;
    }

    /// Advance the playhead by one tick while playing.
    pub fn tick(&mut self) {
        if self.status == PlayerStatus::Playing {
            self.position_ms += TICK_MS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_variants() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ?x=1"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(extract_video_id("https://example.com/song.mp3"), None);
        assert_eq!(extract_video_id("v=short"), None);
    }

    #[test]
    fn test_play_requires_source() {
        let mut player = Player::new();
        player.play();
        assert_eq!(player.status(), PlayerStatus::Stopped);
        player.load_file(PathBuf::from("song.mp3"));
        player.play();
        assert_eq!(player.status(), PlayerStatus::Playing);
    }

    #[test]
    fn test_stop_rewinds_playhead() {
        let mut player = Player::new();
        player.load_file(PathBuf::from("song.mp3"));
        player.play();
        player.tick();
        player.tick();
        assert_eq!(player.position_ms(), 2000);
        player.stop();
        assert_eq!(player.status(), PlayerStatus::Stopped);
        assert_eq!(player.position_ms(), 0);
    }

    #[test]
    fn test_pause_holds_position() {
        let mut player = Player::new();
        player.load_file(PathBuf::from("song.mp3"));
        player.play();
        player.tick();
        player.pause();
        player.tick();
        assert_eq!(player.position_ms(), 1000);
        assert_eq!(player.status(), PlayerStatus::Paused);
    }

    #[test]
    fn test_loading_new_source_displaces_old_and_stops() {
        let mut player = Player::new();
        player.load_file(PathBuf::from("song.mp3"));
        player.play();
        assert!(player.load_video_url("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(
            player.source(),
            Some(&Source::Video("dQw4w9WgXcQ".to_string()))
        );
        assert_eq!(player.status(), PlayerStatus::Stopped);
        // A bad link leaves everything alone
        player.play();
        assert!(!player.load_video_url("not a link"));
        assert_eq!(player.status(), PlayerStatus::Playing);
    }
}
