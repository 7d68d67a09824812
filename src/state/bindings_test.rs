use super::*;

#[test]
fn every_settings_exit_closes_the_settings_modal() {
    for target in [Target::SettingsClose, Target::SettingsCancel, Target::ModalBackdrop(ModalId::Settings)] {
        assert_eq!(resolve(UiEvent::Click(target)), Some(UiAction::CloseModal(ModalId::Settings)), "{target:?}");
    }
}

#[test]
fn chrome_buttons_resolve() {
    assert_eq!(resolve(UiEvent::Click(Target::ThemeToggle)), Some(UiAction::ToggleTheme));
    assert_eq!(resolve(UiEvent::Click(Target::SettingsButton)), Some(UiAction::OpenModal(ModalId::Settings)));
    assert_eq!(resolve(UiEvent::Click(Target::SettingsSave)), Some(UiAction::SaveSettings));
    assert_eq!(resolve(UiEvent::Click(Target::SignOutButton)), Some(UiAction::SignOut));
}

#[test]
fn escape_closes_all_modals() {
    assert_eq!(resolve_key("Escape"), Some(UiAction::CloseAllModals));
    assert_eq!(resolve(UiEvent::Key("Escape")), Some(UiAction::CloseAllModals));
}

#[test]
fn unbound_keys_resolve_to_nothing() {
    assert_eq!(resolve_key("Enter"), None);
    assert_eq!(resolve_key("escape"), None);
}

#[test]
fn each_event_is_bound_at_most_once() {
    for (i, a) in BINDINGS.iter().enumerate() {
        for b in &BINDINGS[i + 1..] {
            assert_ne!(a.event, b.event);
        }
    }
}
