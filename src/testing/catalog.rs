use crate::domain::catalog::Release;

pub fn release(
    os: &str,
    arch: &str,
    package: &str,
    feature: u32,
    bundle: &str,
    version: &str,
) -> Release {
    let filename = format!("bellsoft-{}{}-{}-{}.{}", bundle, version, os, arch, package);
    Release {
        os: os.into(),
        architecture: arch.into(),
        package_type: package.into(),
        feature_version: Some(feature),
        bundle_type: bundle.into(),
        version: version.into(),
        download_url: format!("https://download.example/{}", filename),
        filename,
        size: 1024,
        lts: matches!(feature, 8 | 17 | 21),
        ga: true,
        ..Release::default()
    }
}

/// Small catalog spanning three OSes and several versions.
pub fn sample_releases() -> Vec<Release> {
    vec![
        release("linux", "x86", "tar.gz", 21, "jdk", "21.0.9+11"),
        release("linux", "x86", "tar.gz", 21, "jdk", "21.0.10+7"),
        release("linux", "x86", "tar.gz", 21, "jre", "21.0.10+7"),
        release("linux", "x86", "tar.gz", 17, "jdk", "17.0.13+12"),
        release("linux", "x86", "tar.gz", 8, "jdk", "8u432+7"),
        release("linux", "x86", "deb", 21, "jdk", "21.0.10+7"),
        release("linux", "arm", "tar.gz", 21, "jdk", "21.0.10+7"),
        release("macos", "arm", "zip", 21, "jdk", "21.0.10+7"),
        release("windows", "x86", "msi", 21, "jdk-full", "21.0.10+7"),
        release("windows", "x86", "zip", 17, "jdk", "17.0.13+12"),
    ]
}
