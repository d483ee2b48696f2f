use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SelectUp,
    SelectDown,
    PageUp,
    PageDown,
    JumpTop,       // g: first visible row
    JumpBottom,    // G: last visible row
    Toggle,        // Space / Enter: flip the selected checkbox
    ToggleFilter,  // u: uncollected only
    Reset,         // R: reset all cans (asks first)
    OpenSkins,     // S: open the skin tracker
    CyclePlaythrough,
    CycleCharacter,
    LoadSkins,     // L: load outfits for the selected character/playthrough
    Yes,
    No,
    Back,
    CycleTheme,
    ShowHelp,
    None,
}

pub fn handle_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Navigation — arrow keys and vim jk
        (KeyCode::Up,   _) | (KeyCode::Char('k'), _) => Action::SelectUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::SelectDown,
        (KeyCode::PageUp,   _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Char('g'), _) | (KeyCode::Home, _) => Action::JumpTop,
        (KeyCode::Char('G'), _) | (KeyCode::End,  _) => Action::JumpBottom,

        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Action::Toggle,
        (KeyCode::Char('u'), _) => Action::ToggleFilter,
        (KeyCode::Char('R'), _) => Action::Reset,

        // Skin tracker
        (KeyCode::Char('S'), _) => Action::OpenSkins,
        (KeyCode::Char('p'), _) => Action::CyclePlaythrough,
        (KeyCode::Char('c'), _) => Action::CycleCharacter,
        (KeyCode::Char('L'), _) | (KeyCode::Char('l'), _) => Action::LoadSkins,

        // Confirmation prompt
        (KeyCode::Char('y'), _) | (KeyCode::Char('Y'), _) => Action::Yes,
        (KeyCode::Char('n'), _) | (KeyCode::Char('N'), _) => Action::No,

        (KeyCode::Esc, _) => Action::Back,

        (KeyCode::Char('t'), _) => Action::CycleTheme,
        (KeyCode::Char('?'), _)
        | (KeyCode::F(1), _)   => Action::ShowHelp,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn checklist_keys() {
        assert_eq!(handle_key(key(KeyCode::Char(' '))), Action::Toggle);
        assert_eq!(handle_key(key(KeyCode::Enter)), Action::Toggle);
        assert_eq!(handle_key(key(KeyCode::Char('u'))), Action::ToggleFilter);
        assert_eq!(handle_key(key(KeyCode::Char('j'))), Action::SelectDown);
        assert_eq!(handle_key(key(KeyCode::Char('R'))), Action::Reset);
        assert_eq!(handle_key(key(KeyCode::Char('r'))), Action::None);
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_cycles_character() {
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(handle_key(key(KeyCode::Char('c'))), Action::CycleCharacter);
    }
}
