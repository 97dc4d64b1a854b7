use friendlist::store::FriendField;
use friendlist::ui::core::actions::{Action, DialogType, Focus};

#[test]
fn test_focus_defaults_to_table() {
    assert_eq!(Focus::default(), Focus::Table);
}

#[test]
fn test_actions_compare_by_payload() {
    assert_eq!(Action::ToggleSelect(1), Action::ToggleSelect(1));
    assert_ne!(Action::ToggleSelect(1), Action::ToggleSelect(2));
    assert_ne!(
        Action::ShowDialog(DialogType::Error("a".to_string())),
        Action::ShowDialog(DialogType::Submitted("a".to_string()))
    );

    let edit = Action::UpdateField {
        index: 0,
        field: FriendField::Email,
        value: "x".to_string(),
    };
    assert_eq!(edit.clone(), edit);
}
