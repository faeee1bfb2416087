//! Built-in packaging strategies.

mod dotnet;
mod electron;
mod maven;

pub use dotnet::DotnetPackager;
pub use electron::ElectronPackager;
pub use maven::MavenPackager;

use crate::packager::Packager;

/// Returns all built-in packagers, in classification tie-break order.
pub fn all_packagers() -> Vec<Box<dyn Packager>> {
    vec![
        Box::new(DotnetPackager),
        Box::new(MavenPackager),
        Box::new(ElectronPackager),
    ]
}
