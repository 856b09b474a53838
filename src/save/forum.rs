//! Forum board storage

use std::path::Path;

use super::{read_json, write_json};
use crate::error::Result;
use crate::forum::ForumBoard;

/// Load a saved board, `Ok(None)` if there is none yet
pub fn load_board(path: &Path) -> Result<Option<ForumBoard>> {
    let board = read_json(path)?;
    if board.is_some() {
        log::debug!("Forum loaded from {:?}", path);
    }
    Ok(board)
}

pub fn save_board(path: &Path, board: &ForumBoard) -> Result<()> {
    write_json(path, board)?;
    log::debug!("Forum saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataManager;
    use crate::forum::{Author, NewPost};
    use chrono::{TimeZone, Utc};
    use std::fs;

    #[test]
    fn test_board_survives_save() {
        let dir = std::env::temp_dir().join(format!("tourlms-forum-{}", std::process::id()));
        let path = dir.join("forum.json");
        let mut board = DataManager::default().forum_board();
        let now = Utc.with_ymd_and_hms(2025, 7, 2, 8, 0, 0).unwrap();
        board
            .create_post(
                NewPost {
                    title: "Saved".into(),
                    content: "Kept across runs".into(),
                    category: "general".into(),
                    tags: vec![],
                },
                Author::new("me", "You"),
                now,
            )
            .unwrap();

        save_board(&path, &board).unwrap();
        let loaded = load_board(&path).unwrap().unwrap();
        assert_eq!(loaded, board);
        assert!(load_board(&dir.join("other.json")).unwrap().is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
