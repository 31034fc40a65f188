//! Build script for sessionprobe
//!
//! Handles platform-specific configuration:
//! - Windows: Embeds the application manifest for long path support (>260 chars)
//!
//! By default, Windows limits file paths to 260 characters (MAX_PATH), which
//! recursive scans of deeply nested asset trees can exceed. The manifest
//! (`sessionprobe.manifest`) sets `longPathAware=true` which, combined with
//! the Windows 10 v1607+ registry setting, enables paths up to 32,767
//! characters. On non-Windows platforms this script does nothing.

fn main() {
    #[cfg(windows)]
    {
        // The .rc file references the manifest via the RT_MANIFEST resource type
        embed_resource::compile("sessionprobe.rc", embed_resource::NONE);

        println!("cargo:rerun-if-changed=sessionprobe.rc");
        println!("cargo:rerun-if-changed=sessionprobe.manifest");
    }
}
