pub use crate::{
    Connectivity, Error, FillConfig, HoleFiller, HoleRegion, IntensityBuffer, Pixel,
    PowerLawKernel, RawImage, Result, WeightKernel,
};
