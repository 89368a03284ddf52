pub mod icon_gen;
pub mod manifest_json;
pub mod render;
