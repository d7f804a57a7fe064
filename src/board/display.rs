use std::fmt;
use std::io::{self, Write};

use super::Board;

impl<const N: usize> Board<N> {
    /// ASCII grid: a `+---+` border above every row and below the last,
    /// rows as `|`-separated 3-character glyphs.
    #[must_use]
    pub fn render(&self) -> String {
        trace!("render: {}x{} board", N, N);
        let border = format!("+{}+\n", "-".repeat(4 * N - 1));
        let mut out = String::with_capacity((N + 1) * border.len() + N * (4 * N + 2));
        for row in self.squares.chunks(N) {
            out.push_str(&border);
            out.push('|');
            for square in row {
                out.push_str(square.glyph());
                out.push('|');
            }
            out.push('\n');
        }
        out.push_str(&border);
        out
    }

    /// Write the rendered grid to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    /// Print the rendered grid to standard output through `Display`
    pub fn show(&self) {
        print!("{self}");
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
