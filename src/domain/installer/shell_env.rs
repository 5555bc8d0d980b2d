//! Shell snippets that put an installed JDK on `PATH`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

pub const JAVA_PATH_LINE: &str = r#"export PATH="$JAVA_HOME/bin:$PATH""#;

pub fn export_cmd(variable: &str, value: &str) -> String {
    format!(r#"export {}="{}""#, variable, value)
}

pub fn java_home_cmd(java_home: &Path) -> String {
    export_cmd("JAVA_HOME", &java_home.to_string_lossy())
}

/// `export PATH="<bin>:$PATH"`, or the `$JAVA_HOME/bin` form without a bin path.
pub fn path_cmd(bin: Option<&Path>) -> String {
    match bin {
        Some(bin) => format!(r#"export PATH="{}:$PATH""#, bin.display()),
        None => JAVA_PATH_LINE.to_string(),
    }
}

/// One-liner that activates the JDK in the current Bash/Zsh session.
pub fn quick_activation_cmd(java_home: &Path) -> String {
    let bin = java_home.join("bin");
    format!(
        r#"eval "$(echo 'export JAVA_HOME={}'; echo 'export PATH={}:$PATH')""#,
        java_home.display(),
        bin.display()
    )
}

/// Block appended to shell rc files.
pub fn env_config_block(java_home: &Path, date: NaiveDate) -> String {
    format!(
        "# Java from BellSoft Installer ({})\n{}\n{}",
        date.format("%Y-%m-%d"),
        java_home_cmd(java_home),
        JAVA_PATH_LINE
    )
}

/// Whether an rc file already exports `JAVA_HOME` for this install or its link.
pub fn already_configured(content: &str, install_path: &Path, latest_link: Option<&Path>) -> bool {
    let exported = |path: &Path| content.contains(&format!(r#"JAVA_HOME="{}""#, path.display()));
    exported(install_path) || latest_link.is_some_and(exported)
}

/// `JAVA_HOME` target: the `latest` link when preferred and present.
pub fn java_home_target(
    install_path: &Path,
    latest_link: Option<&Path>,
    prefer_latest_link: bool,
) -> PathBuf {
    match latest_link {
        Some(link) if prefer_latest_link => link.to_path_buf(),
        _ => install_path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_commands() {
        assert_eq!(java_home_cmd(Path::new("/opt/java/jdk-21")), r#"export JAVA_HOME="/opt/java/jdk-21""#);
        assert_eq!(path_cmd(None), r#"export PATH="$JAVA_HOME/bin:$PATH""#);
        assert_eq!(
            path_cmd(Some(Path::new("/opt/java/jdk-21/bin"))),
            r#"export PATH="/opt/java/jdk-21/bin:$PATH""#
        );
    }

    #[test]
    fn config_block_is_dated() {
        let block = env_config_block(
            Path::new("/home/u/Java/latest"),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "# Java from BellSoft Installer (2025-06-01)");
        assert_eq!(lines[1], r#"export JAVA_HOME="/home/u/Java/latest""#);
        assert_eq!(lines[2], JAVA_PATH_LINE);
    }

    #[test]
    fn detects_existing_configuration() {
        let install = Path::new("/home/u/Java/jdk-21.0.2");
        let latest = Path::new("/home/u/Java/latest");
        let content = "alias ll='ls -l'\nexport JAVA_HOME=\"/home/u/Java/latest\"\n";

        assert!(already_configured(content, install, Some(latest)));
        assert!(!already_configured(content, install, None));
        assert!(!already_configured("", install, Some(latest)));
    }

    #[test]
    fn java_home_prefers_link_only_when_asked() {
        let install = Path::new("/j/jdk");
        let latest = Path::new("/j/latest");
        assert_eq!(java_home_target(install, Some(latest), true), latest);
        assert_eq!(java_home_target(install, Some(latest), false), install);
        assert_eq!(java_home_target(install, None, true), install);
    }

    #[test]
    fn quick_activation_mentions_bin_dir() {
        let cmd = quick_activation_cmd(Path::new("/j/jdk"));
        assert!(cmd.contains("export JAVA_HOME=/j/jdk"));
        assert!(cmd.contains("export PATH=/j/jdk/bin:$PATH"));
    }
}
