use crate::engine::{Board, Tile};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, starting from row 0 (the top edge);
/// the board's width is the character count of the first row and its height
/// is the number of rows. Every row must have the same length.
///
/// Valid characters for tiles are:
/// - 'R': `Tile::Red`
/// - 'G': `Tile::Green`
/// - 'Y': `Tile::Yellow`
/// - 'B': `Tile::Blue`
/// - 'P': `Tile::Purple`
/// - '.': `Tile::Empty`
///
/// Any other character will result in an error.
///
/// # Arguments
/// * `rows`: A slice of string slices (`&[&str]`) representing the rows of
///   the board, top to bottom.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(String)` if:
///     - A row's length differs from the first row's.
///     - An unrecognized character is encountered.
///     - The resulting dimensions are 2 or smaller on either axis.
///
/// # Examples
/// ```
/// use match3_engine::utils::board_from_str_rows;
/// use match3_engine::engine::Tile;
///
/// let board = board_from_str_rows(&[
///     "RGB",
///     "GBR",
///     "BRG",
/// ]).unwrap();
/// assert_eq!(board.width(), 3);
/// assert_eq!(board.height(), 3);
/// assert_eq!(board.cells()[0].kind, Tile::Red);
/// assert_eq!(board.cells()[4].kind, Tile::Blue);
///
/// assert!(board_from_str_rows(&["RGX", "GBR", "BRG"]).is_err());
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board, String> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());

    let mut contents = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                y,
                row.chars().count(),
                width
            ));
        }

        for (x, tile_char) in row.chars().enumerate() {
            contents.push(match tile_char {
                'R' => Tile::Red,
                'G' => Tile::Green,
                'Y' => Tile::Yellow,
                'B' => Tile::Blue,
                'P' => Tile::Purple,
                '.' => Tile::Empty,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        tile_char, y, x
                    ))
                }
            });
        }
    }

    Board::from_cells(width, height, &contents).map_err(|e| e.to_string())
}
