use crossterm::event::{KeyCode, KeyEvent};

/// User intents derived from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    // Navigation
    MoveUp,
    MoveDown,
    Enter,
    Back,

    // Mode switching
    ShowFolders,
    ShowTypes,
    ShowLargestFiles,

    // Scanning
    Refresh,
    RefreshAll,
    ToggleSorting,

    Quit,
}

/// View modes for mapping keys to intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Folders,
    ByType,
    LargestFiles,
}

/// Map a key event to a user intent based on the current view mode.
/// `can_go_back` is false when the subject root has no parent.
pub fn map_key_to_intent(key: &KeyEvent, mode: ViewMode, can_go_back: bool) -> Option<Intent> {
    // Common keys across all modes
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Intent::Quit),
        KeyCode::Up | KeyCode::Char('k') => return Some(Intent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => return Some(Intent::MoveDown),
        _ => {}
    }

    match mode {
        ViewMode::Folders => match key.code {
            KeyCode::Esc if can_go_back => Some(Intent::Back),
            KeyCode::Esc => Some(Intent::Quit),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(Intent::Enter),
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(Intent::Back),
            KeyCode::Char('s') => Some(Intent::ToggleSorting),
            KeyCode::Char('r') => Some(Intent::Refresh),
            KeyCode::Char('R') => Some(Intent::RefreshAll),
            KeyCode::Char('t') => Some(Intent::ShowTypes),
            KeyCode::Char('L') => Some(Intent::ShowLargestFiles),
            _ => None,
        },
        ViewMode::ByType => match key.code {
            KeyCode::Esc | KeyCode::Char('t') => Some(Intent::ShowFolders),
            KeyCode::Char('L') => Some(Intent::ShowLargestFiles),
            _ => None,
        },
        ViewMode::LargestFiles => match key.code {
            KeyCode::Esc | KeyCode::Char('L') => Some(Intent::ShowFolders),
            KeyCode::Char('t') => Some(Intent::ShowTypes),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_everywhere() {
        for mode in [ViewMode::Folders, ViewMode::ByType, ViewMode::LargestFiles] {
            assert_eq!(
                map_key_to_intent(&key(KeyCode::Char('q')), mode, true),
                Some(Intent::Quit)
            );
        }
    }

    #[test]
    fn test_esc_backs_out_or_quits() {
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Esc), ViewMode::Folders, true),
            Some(Intent::Back)
        );
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Esc), ViewMode::Folders, false),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_vim_navigation() {
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('j')), ViewMode::Folders, true),
            Some(Intent::MoveDown)
        );
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('k')), ViewMode::ByType, true),
            Some(Intent::MoveUp)
        );
    }

    #[test]
    fn test_refresh_keys_case_sensitive() {
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('r')), ViewMode::Folders, true),
            Some(Intent::Refresh)
        );
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('R')), ViewMode::Folders, true),
            Some(Intent::RefreshAll)
        );
    }

    #[test]
    fn test_mode_switching() {
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('t')), ViewMode::Folders, true),
            Some(Intent::ShowTypes)
        );
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('t')), ViewMode::ByType, true),
            Some(Intent::ShowFolders)
        );
        assert_eq!(
            map_key_to_intent(&key(KeyCode::Char('L')), ViewMode::LargestFiles, true),
            Some(Intent::ShowFolders)
        );
    }
}
