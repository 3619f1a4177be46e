//! Layered configuration for the docpdf toolkit.
//!
//! Layers apply in order, later ones winning field by field: built-in
//! defaults, the `.docpdf.toml` at the git root, the one in the working
//! directory, then an explicit override file. The defaults are the paths and
//! font list the toolkit has always used, so running with no files on disk
//! changes nothing. Relative paths in a file resolve against that file's
//! directory.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".docpdf.toml";

const DEFAULT_GUIDE_OUTPUT: &str = "/var/www/web/my-resty/MyResty_Documentation.pdf";
const DEFAULT_README_INPUT: &str = "/var/www/web/my-openresty/README.md";
const DEFAULT_README_OUTPUT: &str = "/var/www/web/my-openresty/README.pdf";
const DEFAULT_README_TITLE: &str = "MyResty Framework";

const DEFAULT_FONT_CANDIDATES: &[(&str, &str)] = &[
    ("/usr/share/fonts/truetype/arphic/uming.ttc", "UMing"),
    ("/usr/share/fonts/truetype/arphic/ukai.ttc", "UKai"),
    (
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "NotoSans",
    ),
];

/// Fully resolved settings plus the layers they came from.
#[derive(Clone, Debug)]
pub struct Config {
    pub guide: GuideSettings,
    pub readme: ReadmeSettings,
    pub fonts: FontSettings,
    pub sources: ConfigSources,
}

#[derive(Clone, Debug)]
pub struct GuideSettings {
    pub output: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ReadmeSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

/// Font files tried in order until one loads.
#[derive(Clone, Debug)]
pub struct FontSettings {
    pub candidates: Vec<FontCandidateSetting>,
}

/// A font file and the family name documents refer to it by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontCandidateSetting {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ConfigSources {
    pub working_directory: PathBuf,
    pub layers: Vec<ConfigSource>,
}

/// One applied layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSource {
    pub kind: ConfigSourceKind,
    pub path: Option<PathBuf>,
}

impl ConfigSource {
    fn builtin() -> Self {
        ConfigSource {
            kind: ConfigSourceKind::Default,
            path: None,
        }
    }

    fn file(kind: ConfigSourceKind, path: PathBuf) -> Self {
        ConfigSource {
            kind,
            path: Some(path),
        }
    }

    /// Directory that relative paths in this layer are anchored to.
    fn anchor(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} at {}", self.kind, path.display()),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Layer kinds, lowest precedence first.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSourceKind {
    Default,
    GitRoot,
    Local,
    Override,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSourceKind::Default => "built-in defaults",
            ConfigSourceKind::GitRoot => "repository config",
            ConfigSourceKind::Local => "working-directory config",
            ConfigSourceKind::Override => "--config file",
        })
    }
}

/// Where to look for configuration. The CLI fills this from its flags.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub override_path: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot use {path} as working directory: {source}")]
    WorkingDirectory { path: PathBuf, source: io::Error },
    #[error("config file {path} does not exist")]
    OverrideNotFound { path: PathBuf },
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration:\n{0}")]
    Validation(ConfigValidationErrors),
}

impl Config {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = match options.working_dir {
            Some(dir) => fs::canonicalize(&dir)
                .map_err(|source| ConfigError::WorkingDirectory { path: dir, source })?,
            None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
                path: PathBuf::from("."),
                source,
            })?,
        };

        let override_path = match options.override_path {
            Some(path) => {
                let path = working_dir.join(path);
                if !path.is_file() {
                    return Err(ConfigError::OverrideNotFound { path });
                }
                Some(path)
            }
            None => None,
        };

        let mut settings = Settings::defaults();
        let mut layers = vec![ConfigSource::builtin()];
        for (kind, path) in discover(&working_dir, override_path) {
            let file = read_file(&path)?;
            let source = ConfigSource::file(kind, path);
            settings.apply(file, &source);
            layers.push(source);
        }

        let (guide, readme, fonts) = settings.validate()?;
        Ok(Config {
            guide,
            readme,
            fonts,
            sources: ConfigSources {
                working_directory: working_dir,
                layers,
            },
        })
    }
}

/// Config files that exist, lowest precedence first. A file reachable under
/// two roles is only applied once, in its highest role.
fn discover(
    working_dir: &Path,
    override_path: Option<PathBuf>,
) -> Vec<(ConfigSourceKind, PathBuf)> {
    let local = working_dir.join(CONFIG_FILE_NAME);
    let is_override = |path: &Path| override_path.as_deref() == Some(path);
    let mut found = Vec::new();

    if let Some(root) = find_git_root(working_dir) {
        let shared = root.join(CONFIG_FILE_NAME);
        if shared != local && shared.is_file() && !is_override(&shared) {
            found.push((ConfigSourceKind::GitRoot, shared));
        }
    }
    if local.is_file() && !is_override(&local) {
        found.push((ConfigSourceKind::Local, local));
    }
    if let Some(path) = override_path {
        found.push((ConfigSourceKind::Override, path));
    }

    found
}

fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn anchored(source: &ConfigSource, path: PathBuf) -> PathBuf {
    match source.anchor() {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

/// Settings accumulated across layers, remembering which layer set the
/// fields that validation can reject.
struct Settings {
    guide_output: PathBuf,
    readme_input: PathBuf,
    readme_output: PathBuf,
    title: String,
    title_source: ConfigSource,
    candidates: Vec<FileFontCandidate>,
    candidates_source: ConfigSource,
}

impl Settings {
    fn defaults() -> Self {
        let candidates = DEFAULT_FONT_CANDIDATES
            .iter()
            .map(|(path, name)| FileFontCandidate {
                path: PathBuf::from(path),
                name: (*name).to_owned(),
            })
            .collect();

        Settings {
            guide_output: PathBuf::from(DEFAULT_GUIDE_OUTPUT),
            readme_input: PathBuf::from(DEFAULT_README_INPUT),
            readme_output: PathBuf::from(DEFAULT_README_OUTPUT),
            title: DEFAULT_README_TITLE.to_owned(),
            title_source: ConfigSource::builtin(),
            candidates,
            candidates_source: ConfigSource::builtin(),
        }
    }

    fn apply(&mut self, file: FileConfig, source: &ConfigSource) {
        if let Some(output) = file.guide.and_then(|guide| guide.output) {
            self.guide_output = anchored(source, output);
        }

        if let Some(readme) = file.readme {
            if let Some(input) = readme.input {
                self.readme_input = anchored(source, input);
            }
            if let Some(output) = readme.output {
                self.readme_output = anchored(source, output);
            }
            if let Some(title) = readme.title {
                self.title = title;
                self.title_source = source.clone();
            }
        }

        // A layer that lists candidates replaces the whole list.
        if let Some(candidates) = file.fonts.and_then(|fonts| fonts.candidates) {
            self.candidates = candidates;
            self.candidates_source = source.clone();
        }
    }

    fn validate(self) -> Result<(GuideSettings, ReadmeSettings, FontSettings), ConfigError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ConfigValidationError::new(
                "readme.title",
                "title cannot be empty",
                Some(&self.title_source),
            ));
        }
        for (field, path) in [
            ("guide.output", &self.guide_output),
            ("readme.output", &self.readme_output),
        ] {
            if path.file_name().is_none() {
                errors.push(ConfigValidationError::new(
                    field,
                    format!("'{}' does not name a file", path.display()),
                    None,
                ));
            }
        }
        if self.readme_input == self.readme_output {
            errors.push(ConfigValidationError::new(
                "readme",
                format!(
                    "input and output are the same file ({})",
                    self.readme_input.display()
                ),
                None,
            ));
        }

        let source = &self.candidates_source;
        let mut candidates = Vec::with_capacity(self.candidates.len());
        for (idx, candidate) in self.candidates.into_iter().enumerate() {
            let field = format!("fonts.candidates[{idx}]");
            let blank_name = candidate.name.trim().is_empty();
            let blank_path = candidate.path.as_os_str().is_empty();
            if blank_name {
                errors.push(ConfigValidationError::new(
                    &field,
                    "font name cannot be empty",
                    Some(source),
                ));
            }
            if blank_path {
                errors.push(ConfigValidationError::new(
                    &field,
                    "font path cannot be empty",
                    Some(source),
                ));
            }
            if !blank_name && !blank_path {
                candidates.push(FontCandidateSetting {
                    path: anchored(source, candidate.path),
                    name: candidate.name,
                });
            }
        }

        if !errors.is_empty() {
            return Err(ConfigError::Validation(ConfigValidationErrors(errors)));
        }

        Ok((
            GuideSettings {
                output: self.guide_output,
            },
            ReadmeSettings {
                input: self.readme_input,
                output: self.readme_output,
                title: self.title,
            },
            FontSettings { candidates },
        ))
    }
}

/// Every problem found in one load, one per line.
#[derive(Debug)]
pub struct ConfigValidationErrors(pub Vec<ConfigValidationError>);

impl ConfigValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ConfigValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|err| format!("  {err}")).collect();
        f.write_str(&lines.join("\n"))
    }
}

#[derive(Clone, Debug)]
pub struct ConfigValidationError {
    /// Dotted key the problem belongs to, e.g. `readme.title`.
    pub field: String,
    pub message: String,
    pub source: Option<ConfigSource>,
}

impl ConfigValidationError {
    fn new(field: &str, message: impl Into<String>, source: Option<&ConfigSource>) -> Self {
        ConfigValidationError {
            field: field.to_owned(),
            message: message.into(),
            source: source.cloned(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        match &self.source {
            Some(source) => write!(f, " (from {source})"),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    guide: Option<FileGuide>,
    readme: Option<FileReadme>,
    fonts: Option<FileFonts>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileGuide {
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileReadme {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileFonts {
    candidates: Option<Vec<FileFontCandidate>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileFontCandidate {
    path: PathBuf,
    name: String,
}
