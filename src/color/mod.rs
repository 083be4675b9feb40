/// RMS color averaging over image regions
pub mod average;
/// Web-safe palette and frame quantization
pub mod palette;
