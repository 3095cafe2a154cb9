use crate::game_state::{chess_types::Square, position::Position};

/// True when every square strictly between `src` and `dst` is empty.
///
/// The two squares must share a row, a column or a diagonal; any other pair
/// is reported as blocked.
pub fn path_is_clear(position: &Position, src: Square, dst: Square) -> bool {
    let d_row = dst.row - src.row;
    let d_col = dst.col - src.col;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    if !aligned || (d_row == 0 && d_col == 0) {
        return false;
    }

    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let mut current = src.offset(step_row, step_col);
    while current != dst {
        if !position.is_empty(current) {
            return false;
        }
        current = current.offset(step_row, step_col);
    }

    true
}
