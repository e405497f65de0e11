use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position, WinningLine};

const MIN_CELL_SIZE: f32 = 40.0;
const LINE_WIDTH: f32 = 2.0;
const MARK_PADDING: f32 = 0.2;
const HIGHLIGHT: egui::Color32 = egui::Color32::YELLOW;

pub struct BoardView<'a> {
    pub board: &'a Board,
    pub winning_line: Option<WinningLine>,
    pub accepts_input: bool,
}

pub fn cell_size_for(available: egui::Vec2) -> f32 {
    (available.x.min(available.y) / BOARD_SIZE as f32).max(MIN_CELL_SIZE)
}

/// Maps a pointer position inside the board rect to a cell.
pub fn cell_at(rect: egui::Rect, cell_size: f32, pointer: egui::Pos2) -> Option<Position> {
    if !rect.contains(pointer) || cell_size <= 0.0 {
        return None;
    }
    let col = ((pointer.x - rect.left()) / cell_size) as usize;
    let row = ((pointer.y - rect.top()) / cell_size) as usize;
    let position = Position::new(row, col);
    position.is_on_board().then_some(position)
}

fn cell_rect(rect: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            rect.left() + position.col as f32 * cell_size,
            rect.top() + position.row as f32 * cell_size,
        ),
        egui::vec2(cell_size, cell_size),
    )
}

/// Draws the grid and returns the cell the user clicked, if any.
pub fn render_board(ui: &mut egui::Ui, view: &BoardView<'_>, cell_size: f32) -> Option<Position> {
    let side = cell_size * BOARD_SIZE as f32;
    let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

    if let Some(line) = view.winning_line {
        for position in line.cells {
            painter.rect_filled(cell_rect(rect, cell_size, position), 0.0, HIGHLIGHT);
        }
    }

    let hovered = response
        .hover_pos()
        .and_then(|pointer| cell_at(rect, cell_size, pointer))
        .filter(|&pos| view.accepts_input && view.board.get(pos) == Mark::Empty);
    if let Some(position) = hovered {
        painter.rect_filled(
            cell_rect(rect, cell_size, position),
            0.0,
            egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
        );
    }

    for i in 0..=BOARD_SIZE {
        let offset = i as f32 * cell_size;
        let stroke = egui::Stroke::new(LINE_WIDTH, egui::Color32::BLACK);
        painter.line_segment(
            [
                egui::pos2(rect.left() + offset, rect.top()),
                egui::pos2(rect.left() + offset, rect.bottom()),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.left(), rect.top() + offset),
                egui::pos2(rect.right(), rect.top() + offset),
            ],
            stroke,
        );
    }

    for position in Board::positions() {
        let target = cell_rect(rect, cell_size, position);
        match view.board.get(position) {
            Mark::X => draw_x(painter, target),
            Mark::O => draw_o(painter, target),
            Mark::Empty => {}
        }
    }

    if response.clicked() && view.accepts_input {
        return response
            .interact_pointer_pos()
            .and_then(|pointer| cell_at(rect, cell_size, pointer));
    }
    None
}

fn mark_stroke(rect: egui::Rect, color: egui::Color32) -> egui::Stroke {
    egui::Stroke::new((rect.width() * 0.06).max(3.0), color)
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * MARK_PADDING;
    let stroke = mark_stroke(rect, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );

    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * MARK_PADDING;
    let radius = (rect.width() / 2.0) - padding;
    let stroke = mark_stroke(rect, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}
