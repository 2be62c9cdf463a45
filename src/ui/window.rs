use super::geometry::BoardGeometry;
use super::status::{self, SquareShade};
use crate::chess_board::{ChessField, Color as Side};
use crate::game::Game;
use crate::{Field, MainWindow};
use slint::{Color, ComponentHandle, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

/// Height reserved above the board for the title and status texts.
const HEADER_HEIGHT: f32 = 140.0;
/// Room around the board for the coordinate labels.
const BOARD_MARGIN: f32 = 20.0;

/// Maps a `Game` to the 64 fields the board grid shows, A1 first.
pub fn map_game_to_ui(game: &Game) -> ModelRc<Field> {
    let fields: Vec<Field> = ChessField::all()
        .map(|field| {
            let glyph = game
                .board()
                .piece_at(field)
                .map(|piece| piece.glyph().to_string())
                .unwrap_or_default();
            let (r, g, b) = SquareShade::of(game, field).rgb();
            Field {
                glyph: SharedString::from(glyph),
                background: Color::from_rgb_u8(r, g, b),
            }
        })
        .collect();

    ModelRc::new(VecModel::from(fields))
}

fn refresh(window: &MainWindow, game: &Game, message: Option<String>) {
    window.set_fields(map_game_to_ui(game));
    window.set_turn_info(status::turn_line(game).into());
    window.set_turn_color(match game.turn() {
        Side::White => Color::from_rgb_u8(204, 153, 0),
        Side::Black => Color::from_rgb_u8(102, 51, 204),
    });
    let mut selection = status::selection_lines(game).into_iter();
    window.set_selection_info(selection.next().unwrap_or_default().into());
    window.set_moves_info(selection.next().unwrap_or_default().into());
    window.set_hover_info(status::hover_line(game).unwrap_or_default().into());
    if let Some(message) = message {
        window.set_message(message.into());
    }
}

fn geometry(window: &MainWindow) -> BoardGeometry {
    BoardGeometry::new(window.get_board_x(), window.get_board_y(), window.get_board_size() / 8.0)
}

/// Fits the board into the window area below the header.
fn layout_board(window: &MainWindow, width: f32, height: f32) {
    let mut geometry = BoardGeometry::fit(width, (height - HEADER_HEIGHT).max(0.0), BOARD_MARGIN);
    geometry.origin_y += HEADER_HEIGHT;
    window.set_board_x(geometry.origin_x);
    window.set_board_y(geometry.origin_y);
    window.set_board_size(geometry.board_size());
}

/// Opens the board window and runs the event loop until it is closed.
pub fn setup_ui(game: Game) -> Result<(), slint::PlatformError> {
    let window = MainWindow::new()?;
    let game = Rc::new(RefCell::new(game));
    refresh(&window, &game.borrow(), None);

    let weak = window.as_weak();
    window.on_resized(move |width, height| {
        if let Some(window) = weak.upgrade() {
            layout_board(&window, width, height);
        }
    });

    let (weak, state) = (window.as_weak(), game.clone());
    window.on_board_clicked(move |x, y| {
        let Some(window) = weak.upgrade() else { return };
        let mut game = state.borrow_mut();
        let feedback = game.click(geometry(&window).square_at(x, y));
        refresh(&window, &game, Some(feedback.to_string()));
    });

    let (weak, state) = (window.as_weak(), game.clone());
    window.on_board_hovered(move |x, y| {
        let Some(window) = weak.upgrade() else { return };
        let mut game = state.borrow_mut();
        if game.hover(geometry(&window).square_at(x, y)) {
            refresh(&window, &game, None);
        }
    });

    let (weak, state) = (window.as_weak(), game.clone());
    window.on_board_left(move || {
        let Some(window) = weak.upgrade() else { return };
        let mut game = state.borrow_mut();
        if game.hover(None) {
            refresh(&window, &game, None);
        }
    });

    let (weak, state) = (window.as_weak(), game.clone());
    window.on_clear_selection(move || {
        let Some(window) = weak.upgrade() else { return };
        let mut game = state.borrow_mut();
        let feedback = game.clear_selection();
        refresh(&window, &game, Some(feedback.to_string()));
    });

    window.on_quit(|| {
        info!("quit requested");
        if let Err(err) = slint::quit_event_loop() {
            warn!(%err, "cannot stop the event loop");
        }
    });

    window.show()?;
    let size = window.window().size().to_logical(window.window().scale_factor());
    layout_board(&window, size.width, size.height);
    slint::run_event_loop()?;
    window.hide()
}
