//! Apple family build invocations
//!
//! macOS, iOS and visionOS share a single Xcode project; the target is
//! selected through xcodebuild's generic destination parameter.

use super::Invocation;

/// Xcode project driven by the dispatcher
pub const XCODE_PROJECT: &str = "apple/MyApp.xcodeproj";

/// Scheme built for every Apple platform
pub const XCODE_SCHEME: &str = "MyApp";

/// Build configuration
pub const XCODE_CONFIGURATION: &str = "Release";

/// Construct the xcodebuild invocation for one Apple platform
pub fn invocation(destination_label: &str, clean: bool) -> Invocation {
    let action = if clean { "clean" } else { "build" };

    Invocation::new("xcodebuild")
        .arg("-project")
        .arg(XCODE_PROJECT)
        .arg("-scheme")
        .arg(XCODE_SCHEME)
        .arg("-configuration")
        .arg(XCODE_CONFIGURATION)
        .arg("-destination")
        .arg(format!("generic/platform={}", destination_label))
        .arg(action)
}
