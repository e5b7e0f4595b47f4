//! Container list + detail panel, driven one input event at a time.
//!
//! Layout (full width, `h` = surface height):
//! - list panel: rows `0..=h-11`, a bold `IMAGE`/`PORTS` header then one row per container
//! - detail panel: rows `h-10..=h-1`, the selected container
//!
//! Selection changes never redraw the list text. The old row is restyled back to
//! `default`, then the new row is restyled to `inverted`.

use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crate::core::view::EventResult;
use crate::models::container::ContainerRecord;
use crate::ui::core::draw::{self, text_len};
use crate::ui::core::geom::{Point, Size};
use crate::ui::core::panel::Panel;
use crate::ui::core::style::{Style, Styles};
use crate::ui::surface::Surface;
use std::io;

/// Rows taken by the detail panel, border included.
pub const DETAIL_HEIGHT: i32 = 10;

/// Screen row of container `k` is `list top + k + 2`: one border row, one header row.
const HIGHLIGHT_ROW_OFFSET: i32 = 2;

const IMAGE_HEADER: &str = "IMAGE";
const PORTS_HEADER: &str = "PORTS";
const EMPTY_MESSAGE: &str = "no containers";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub list: Panel,
    pub detail: Panel,
}

impl Layout {
    pub fn for_size(size: Size) -> Self {
        let right = size.width - 1;
        let bottom = size.height - 1;
        Self {
            list: Panel::new(
                Point::ORIGIN,
                Point::new(right, size.height - DETAIL_HEIGHT - 1),
            ),
            detail: Panel::new(
                Point::new(0, size.height - DETAIL_HEIGHT),
                Point::new(right, bottom),
            ),
        }
    }
}

pub struct Dashboard<S: Surface> {
    surface: S,
    styles: Styles,
    containers: Vec<ContainerRecord>,
    selected: usize,
    size: Size,
    layout: Layout,
    /// Local column where the PORTS column starts.
    ports_column: i32,
}

impl<S: Surface> Dashboard<S> {
    /// Nothing is drawn until [`Dashboard::draw`] or [`Dashboard::run`].
    pub fn new(surface: S, styles: Styles, containers: Vec<ContainerRecord>) -> Self {
        let size = surface.size();
        let name_width = containers
            .iter()
            .map(|c| text_len(&c.image))
            .chain(std::iter::once(text_len(IMAGE_HEADER)))
            .max()
            .unwrap_or(0);
        Self {
            surface,
            styles,
            containers,
            selected: 0,
            size,
            layout: Layout::for_size(size),
            ports_column: name_width + 1,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn containers(&self) -> &[ContainerRecord] {
        &self.containers
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_container(&self) -> Option<&ContainerRecord> {
        self.containers.get(self.selected)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Surface span `(left, right)` restyled for container `index`, or `None` if
    /// that row falls outside the list panel.
    pub fn highlight_span(&self, index: usize) -> Option<(Point, Point)> {
        let (inner_lo, inner_hi) = self.layout.list.interior()?;
        let (lo, hi) = self.layout.list.bounds();
        let row = i32::try_from(index)
            .ok()?
            .checked_add(lo.y + HIGHLIGHT_ROW_OFFSET)?;
        if row < inner_lo.y || row > inner_hi.y {
            return None;
        }
        Some((Point::new(lo.x + 1, row), Point::new(hi.x - 1, row)))
    }

    /// Full redraw of both panels and the highlight.
    pub fn draw(&mut self) {
        self.render_list();
        if !self.containers.is_empty() {
            self.restyle_row(self.selected, self.styles.inverted);
        }
        self.render_detail();
    }

    /// Presents, waits for an event, handles it; until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        self.draw();
        loop {
            self.surface.present()?;
            let event = self.surface.poll_event()?;
            if self.handle_event(&event)?.is_quit() {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> io::Result<EventResult> {
        match event {
            InputEvent::Key(key) if key.is_press() => Ok(self.handle_key(key)),
            InputEvent::Resize(..) => {
                self.resize()?;
                Ok(EventResult::Consumed)
            }
            // Mouse capture is on, but clicks do nothing yet.
            _ => Ok(EventResult::Ignored),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Esc => EventResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Quit
            }
            _ => EventResult::Ignored,
        }
    }

    fn select_previous(&mut self) -> EventResult {
        if self.containers.is_empty() || self.selected == 0 {
            return EventResult::Ignored;
        }
        self.select(self.selected - 1);
        EventResult::Consumed
    }

    fn select_next(&mut self) -> EventResult {
        if self.selected + 1 >= self.containers.len() {
            return EventResult::Ignored;
        }
        self.select(self.selected + 1);
        EventResult::Consumed
    }

    fn select(&mut self, next: usize) {
        tracing::debug!(from = self.selected, to = next, "selection changed");
        self.restyle_row(self.selected, self.styles.default);
        self.selected = next;
        self.restyle_row(self.selected, self.styles.inverted);
        self.render_detail();
    }

    fn resize(&mut self) -> io::Result<()> {
        self.surface.sync()?;
        self.size = self.surface.size();
        self.layout = Layout::for_size(self.size);
        tracing::info!(
            width = self.size.width,
            height = self.size.height,
            "terminal resized"
        );
        self.draw();
        Ok(())
    }

    fn restyle_row(&mut self, index: usize, style: Style) {
        if let Some((left, right)) = self.highlight_span(index) {
            draw::set_style(&mut self.surface, left, right, style);
        }
    }

    fn render_list(&mut self) {
        let list = self.layout.list;
        let styles = self.styles;
        list.render(&mut self.surface, styles.box_line);

        list.draw_text_simple(&mut self.surface, Point::ORIGIN, styles.bold, IMAGE_HEADER);
        list.draw_text_simple(
            &mut self.surface,
            Point::new(self.ports_column, 0),
            styles.bold,
            PORTS_HEADER,
        );

        if self.containers.is_empty() {
            list.draw_text_simple(&mut self.surface, Point::new(0, 1), styles.default, EMPTY_MESSAGE);
            return;
        }

        for (i, container) in self.containers.iter().enumerate() {
            let Ok(row) = i32::try_from(i + 1) else {
                break;
            };
            list.draw_text_simple(
                &mut self.surface,
                Point::new(0, row),
                styles.default,
                &container.image,
            );
            list.draw_text_simple(
                &mut self.surface,
                Point::new(self.ports_column, row),
                styles.default,
                &container.port_summary(),
            );
        }
    }

    fn render_detail(&mut self) {
        let detail = self.layout.detail;
        detail.render(&mut self.surface, self.styles.box_line);

        let Some(container) = self.containers.get(self.selected) else {
            return;
        };
        for (row, line) in detail_lines(container).iter().enumerate() {
            let Ok(row) = i32::try_from(row) else {
                break;
            };
            detail.draw_text_simple(
                &mut self.surface,
                Point::new(0, row),
                self.styles.default,
                line,
            );
        }
    }
}

/// Detail panel text for one container, image first.
pub fn detail_lines(container: &ContainerRecord) -> Vec<String> {
    let mut lines = vec![container.image.clone()];
    if let Some(name) = container.display_name() {
        lines.push(format!("name:   {}", name));
    }
    match (container.state.is_empty(), container.status.is_empty()) {
        (false, false) => lines.push(format!("state:  {} ({})", container.state, container.status)),
        (false, true) => lines.push(format!("state:  {}", container.state)),
        (true, false) => lines.push(format!("status: {}", container.status)),
        (true, true) => {}
    }
    if !container.id.is_empty() {
        lines.push(format!("id:     {}", container.short_id()));
    }
    for port in &container.ports {
        if port.bind_address.is_empty() {
            lines.push(format!("port:   {}", port.label()));
        } else {
            lines.push(format!("port:   {} on {}", port.label(), port.bind_address));
        }
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/app/dashboard.rs"]
mod tests;
