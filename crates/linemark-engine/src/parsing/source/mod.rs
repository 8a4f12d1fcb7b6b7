pub mod cursor;
pub mod text;

pub use cursor::LineCursor;
pub use text::{count_leading, is_blank, join_lines};
