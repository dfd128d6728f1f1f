pub mod accent;
pub mod channel;
pub mod model;
pub mod parse;
pub mod wheel;

pub use model::{CmykColor, HslColor, HsvColor, RgbaColor};
pub use parse::{ColorParseError, parse_color, try_parse};
