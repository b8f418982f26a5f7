mod camera;

pub use camera::{CctvCamera, CctvData};
