pub mod build_prop;
pub mod getprop;
pub mod static_context;

pub use build_prop::BuildPropPlatformContext;
pub use getprop::GetpropPlatformContext;
pub use static_context::StaticPlatformContext;
