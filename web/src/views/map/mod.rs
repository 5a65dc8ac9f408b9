pub mod proofer_marker;
pub mod spot_map;
