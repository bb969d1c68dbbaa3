use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
    sync::mpsc::{self, Receiver},
    thread,
};

use crate::manifest::NativeManifest;

pub type ExecResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A static library produced by [`Cmd::build`].
#[derive(Debug, Clone)]
pub struct Library {
    name: String,
    dir: PathBuf,
}

impl Library {
    /// The name to pass to `cargo::rustc-link-lib=static=`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory to pass to `cargo::rustc-link-search=native=`.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn archive(&self) -> PathBuf {
        self.dir.join(format!("lib{}.a", self.name))
    }
}

pub struct Cmd {
    path: Option<PathBuf>,
    output_path: PathBuf,
    flags: Vec<String>,
    defines: Vec<String>,
}

impl Default for Cmd {
    fn default() -> Self {
        Self::new()
    }
}

impl Cmd {
    pub fn new() -> Self {
        Self {
            path: None,
            output_path: PathBuf::from("build"),
            flags: Vec::new(),
            defines: Vec::new(),
        }
    }

    pub fn add_flag<T>(mut self, flag: T) -> Self
    where
        T: Into<String>, {
        self.flags.push(flag.into());
        self
    }

    pub fn set_path<T>(mut self, path: T) -> Self
    where
        T: Into<PathBuf>, {
        self.path = Some(path.into());
        self
    }

    pub fn set_output_path<T>(mut self, path: T) -> Self
    where
        T: Into<PathBuf>, {
        self.output_path = path.into();
        self
    }

    pub fn add_define<T>(mut self, define: T) -> Self
    where
        T: Into<String>, {
        self.defines.push(format!("-D{}", define.into()));
        self
    }

    pub fn build(&mut self) -> ExecResult<Library> {
        self.execute()
    }

    pub fn spawn(mut self) -> Receiver<ExecResult<Library>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(self.execute());
        });

        rx
    }

    fn execute(&mut self) -> ExecResult<Library> {
        let compiler = Tool::find(env::var_os("CC"), &["cc", "gcc", "clang"])?;
        let archiver = Tool::find(env::var_os("AR"), &["ar"])?;

        let source_path = match &self.path {
            Some(path) => path.clone(),
            None => PathBuf::from("."),
        };
        let manifest = NativeManifest::new(&source_path)?;

        check_dir_exists_and_create(&self.output_path)?;

        // compile every source into its own object
        let mut objects = Vec::with_capacity(manifest.sources().len());
        for source in manifest.sources() {
            let source = source_path.join(source);
            let object = self.output_path.join(object_name(&source)?);

            let status = compiler
                .command()
                .args(["-c", "-fPIC", "-O2"])
                .args(manifest.flags())
                .args(&self.flags)
                .args(&self.defines)
                .arg(&source)
                .arg("-o")
                .arg(&object)
                .status()?;

            if !status.success() {
                return Err(format!("compiling {} failed with status: {}", source.display(), status).into());
            }

            objects.push(object);
        }

        let library = Library {
            name: manifest.library().to_string(),
            dir: self.output_path.clone(),
        };

        // ar appends to an existing archive, start from a clean one
        let archive = library.archive();
        if archive.exists() {
            std::fs::remove_file(&archive)?;
        }

        let status = archiver
            .command()
            .arg("crs")
            .arg(&archive)
            .args(&objects)
            .status()?;

        if !status.success() {
            return Err(format!("archiving {} failed with status: {}", archive.display(), status).into());
        }

        Ok(library)
    }
}

/// A program located on `PATH`, with any leading arguments taken from the
/// environment override (`CC="ccache gcc"`).
#[derive(Debug)]
struct Tool {
    program: PathBuf,
    args: Vec<String>,
}

impl Tool {
    fn find(value: Option<OsString>, candidates: &[&str]) -> ExecResult<Self> {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let value = value.to_string_lossy().into_owned();
            let mut words = value.split_whitespace();
            let Some(program) = words.next() else {
                return Err(format!("tool override {:?} names no program", value).into());
            };

            let program = which::which(program)
                .map_err(|e| format!("{} can't be used: {}", program, e))?;

            return Ok(Self {
                program,
                args: words.map(str::to_string).collect(),
            });
        }

        candidates
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(|program| Self { program, args: Vec::new() })
            .ok_or_else(|| format!("none of {} found in path", candidates.join(", ")).into())
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

fn object_name(source: &Path) -> ExecResult<PathBuf> {
    let Some(stem) = source.file_stem() else {
        return Err(format!("{} is not a source file", source.display()).into());
    };

    let mut object = PathBuf::from(stem);
    object.set_extension("o");
    Ok(object)
}

fn check_dir_exists_and_create(path: &PathBuf) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
