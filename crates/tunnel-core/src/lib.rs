pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod overlay;
pub mod pacer;
pub mod playback;
pub mod sequence;
pub mod session;
pub mod shapes;
pub mod timing;
pub mod tunnel;

pub static STROKE_WGSL: &str = include_str!("../shaders/stroke.wgsl");

pub use audio::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use input::*;
pub use overlay::*;
pub use pacer::*;
pub use playback::*;
pub use sequence::*;
pub use session::*;
pub use shapes::*;
pub use timing::*;
pub use tunnel::*;
