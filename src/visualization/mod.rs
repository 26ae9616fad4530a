pub mod headless;
#[cfg(feature = "viewer")]
pub mod plsim_vis3d;
