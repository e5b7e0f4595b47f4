use super::*;

#[test]
fn ctrl_c_keeps_control_modifier() {
    let event = ct::KeyEvent::new(ct::KeyCode::Char('c'), ct::KeyModifiers::CONTROL);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('c'));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert!(converted.is_press());
}

#[test]
fn unbound_keys_become_unknown() {
    for code in [
        ct::KeyCode::Enter,
        ct::KeyCode::Left,
        ct::KeyCode::PageDown,
        ct::KeyCode::F(5),
        ct::KeyCode::Null,
    ] {
        let converted = into_key_event(ct::KeyEvent::new(code, ct::KeyModifiers::NONE));
        assert_eq!(converted.code, KeyCode::Unknown, "{code:?}");
        assert_eq!(converted.modifiers, KeyModifiers::NONE);
    }
}

#[test]
fn release_kind_is_preserved() {
    let event = ct::KeyEvent::new_with_kind(
        ct::KeyCode::Down,
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Down);
    assert_eq!(converted.kind, KeyEventKind::Release);
}

#[test]
fn resize_and_mouse_events_convert() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );

    let mouse = ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 4,
        row: 7,
        modifiers: ct::KeyModifiers::SHIFT,
    };
    assert_eq!(
        into_input_event(ct::Event::Mouse(mouse)),
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
        })
    );
}

#[test]
fn focus_and_paste_collapse_to_other() {
    assert_eq!(into_input_event(ct::Event::FocusGained), InputEvent::Other);
    assert_eq!(into_input_event(ct::Event::FocusLost), InputEvent::Other);
    assert_eq!(
        into_input_event(ct::Event::Paste("docker ps".to_string())),
        InputEvent::Other
    );
}
