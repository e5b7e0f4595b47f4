use super::*;
use crate::core::event::{KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use crate::models::container::PortMapping;
use crate::ui::backend::test::TestSurface;

fn sample() -> Vec<ContainerRecord> {
    vec![
        ContainerRecord::new("nginx", vec![PortMapping::new(80, 8080, "tcp", "0.0.0.0")]),
        ContainerRecord::new("redis", Vec::new()),
    ]
}

fn dashboard(width: i32, height: i32, containers: Vec<ContainerRecord>) -> Dashboard<TestSurface> {
    let mut d = Dashboard::new(TestSurface::new(width, height), Styles::default(), containers);
    d.draw();
    d
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::press(code))
}

#[test]
fn layout_splits_list_and_detail_panels() {
    let layout = Layout::for_size(Size::new(40, 20));
    assert_eq!(layout.list.bounds(), (Point::new(0, 0), Point::new(39, 9)));
    assert_eq!(layout.detail.bounds(), (Point::new(0, 10), Point::new(39, 19)));
}

#[test]
fn highlight_span_covers_the_row_inside_the_border() {
    let d = dashboard(40, 20, sample());
    assert_eq!(d.highlight_span(0), Some((Point::new(1, 2), Point::new(38, 2))));
    assert_eq!(d.highlight_span(1), Some((Point::new(1, 3), Point::new(38, 3))));
    // Last interior row of the list panel is 8.
    assert_eq!(d.highlight_span(6), Some((Point::new(1, 8), Point::new(38, 8))));
    assert_eq!(d.highlight_span(7), None);
}

#[test]
fn ports_column_never_overlaps_the_image_header() {
    let d = dashboard(30, 20, vec![ContainerRecord::new("db", Vec::new())]);
    assert!(d.surface().grid().row_text(1).starts_with("│IMAGE PORTS"));
}

#[test]
fn short_images_keep_ports_clear_of_the_header() {
    let d = dashboard(
        40,
        20,
        vec![ContainerRecord::new("a", vec![PortMapping::new(80, 8080, "tcp", "0.0.0.0")])],
    );
    assert_eq!(d.ports_column, 6);
    let grid = d.surface().grid();
    assert!(grid.row_text(1).starts_with("│IMAGE PORTS"));
    assert!(grid.row_text(2).starts_with("│a     80 -> 8080 tcp"));
}

#[test]
fn non_press_keys_and_mouse_are_ignored() {
    let mut d = dashboard(40, 20, sample());
    let before = d.surface().grid().clone();

    let mut release = KeyEvent::press(KeyCode::Down);
    release.kind = KeyEventKind::Release;
    assert!(d.handle_event(&InputEvent::Key(release)).unwrap().is_ignored());

    let click = InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 3,
    });
    assert!(d.handle_event(&click).unwrap().is_ignored());
    assert!(d.handle_event(&key(KeyCode::Char('q'))).unwrap().is_ignored());
    assert!(d.handle_event(&InputEvent::Other).unwrap().is_ignored());

    assert_eq!(d.selected(), 0);
    assert_eq!(d.surface().grid(), &before);
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut d = dashboard(40, 20, sample());
    assert!(d.handle_event(&key(KeyCode::Esc)).unwrap().is_quit());
    assert!(d
        .handle_event(&InputEvent::Key(KeyEvent::ctrl('c')))
        .unwrap()
        .is_quit());
    assert!(d.handle_event(&key(KeyCode::Char('c'))).unwrap().is_ignored());
}

#[test]
fn empty_list_shows_message_and_ignores_navigation() {
    let mut d = dashboard(40, 20, Vec::new());
    let grid = d.surface().grid();
    assert!(grid.row_text(2).starts_with("│no containers"));
    for y in 0..20 {
        for x in 0..40 {
            assert_ne!(grid.cell(x, y).unwrap().style, Styles::default().inverted);
        }
    }
    assert_eq!(d.selected_container(), None);

    assert!(d.handle_event(&key(KeyCode::Down)).unwrap().is_ignored());
    assert!(d.handle_event(&key(KeyCode::Up)).unwrap().is_ignored());
    assert_eq!(d.selected(), 0);
}

#[test]
fn selection_past_the_visible_rows_only_updates_the_detail() {
    let containers: Vec<_> = (0..12)
        .map(|i| ContainerRecord::new(format!("img{i}"), Vec::new()))
        .collect();
    let mut d = dashboard(40, 20, containers);
    let bottom_border = d.surface().grid().row_text(9);

    for _ in 0..8 {
        assert!(d.handle_event(&key(KeyCode::Down)).unwrap().is_consumed());
    }
    assert_eq!(d.selected(), 8);

    let grid = d.surface().grid();
    assert_eq!(grid.row_text(9), bottom_border);
    assert!(grid.row_text(11).starts_with("│img8"));
    for y in 0..10 {
        for x in 0..40 {
            assert_ne!(grid.cell(x, y).unwrap().style, Styles::default().inverted);
        }
    }
}

#[test]
fn tiny_terminal_does_not_fault() {
    let mut d = dashboard(12, 5, sample());
    assert!(d.handle_event(&key(KeyCode::Down)).unwrap().is_consumed());
    assert_eq!(d.selected(), 1);
    let grid = d.surface().grid();
    for y in 0..5 {
        for x in 0..12 {
            assert_ne!(grid.cell(x, y).unwrap().style, Styles::default().inverted);
        }
    }
}

#[test]
fn detail_lines_start_with_the_image() {
    let mut c = ContainerRecord::new(
        "nginx",
        vec![
            PortMapping::new(80, 8080, "tcp", "0.0.0.0"),
            PortMapping::new(80, 8080, "tcp", "::"),
            PortMapping::new(53, 0, "udp", ""),
        ],
    );
    c.names = vec!["/web".to_string()];
    c.state = "running".to_string();
    c.status = "Up 5 minutes".to_string();
    c.id = "0123456789abcdef".to_string();

    assert_eq!(
        detail_lines(&c),
        vec![
            "nginx",
            "name:   web",
            "state:  running (Up 5 minutes)",
            "id:     0123456789ab",
            "port:   80 -> 8080 tcp on 0.0.0.0",
            "port:   80 -> 8080 tcp on ::",
            "port:   53 -> 0 udp",
        ]
    );
}

#[test]
fn detail_lines_skip_missing_fields() {
    let c = ContainerRecord::new("redis", Vec::new());
    assert_eq!(detail_lines(&c), vec!["redis"]);
}
