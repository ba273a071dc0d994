//! Command dispatch: one handler per subcommand

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::OutputFormat;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

/// Run the command selected on the command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let dir = resolve_dir(cli.dir.as_deref())?;

    match &cli.command {
        Some(Commands::Parse {
            file,
            format,
            compact,
            output,
        }) => {
            let container = ServiceContainer::new(Settings::load(Some(&dir))?);
            let options = ParseOptions::resolve(
                &container.settings,
                *format,
                *compact,
                output.as_deref(),
            );
            cmd_parse(&container, file.as_deref(), &options)
        }
        Some(Commands::Config { command }) => cmd_config(command, &dir),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

fn resolve_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(d) if !d.is_dir() => Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            d.display()
        ))),
        Some(d) => Ok(d.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e).into()),
    }
}

/// Effective output options: CLI flags override settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub output: Option<PathBuf>,
}

impl ParseOptions {
    pub fn resolve(
        settings: &Settings,
        format: Option<OutputFormat>,
        compact: bool,
        output: Option<&Path>,
    ) -> Self {
        Self {
            format: format.unwrap_or(settings.format),
            pretty: settings.pretty && !compact,
            output: output
                .map(Path::to_path_buf)
                .or_else(|| settings.output.clone()),
        }
    }
}

#[instrument(skip(container))]
fn cmd_parse(
    container: &ServiceContainer,
    file: Option<&Path>,
    options: &ParseOptions,
) -> CliResult<()> {
    let service = &container.sitemap_service;
    let target = options.output.as_deref();

    let rendered = match file {
        Some(path) if path != Path::new("-") => {
            service.convert(path, target, options.format, options.pretty)?
        }
        _ => {
            debug!("reading sitemap from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| InfraError::io("read sitemap from stdin", e))?;
            service.convert_str(&text, target, options.format, options.pretty)?
        }
    };

    match target {
        Some(path) => output::success(&format!("wrote {}", path.display())),
        None => output::data(&rendered),
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, dir: &Path) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(dir))?;
            output::data(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".into())
                })?
            } else {
                local_config_path(dir)
            };
            let container = ServiceContainer::new(Settings::default());
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .and_then(|_| container.fs.write(&path, &Settings::template()))
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            output::header("Config files");
            match global_config_path() {
                Some(p) => output::detail(&format!("global: {}", p.display())),
                None => output::warning("cannot determine global config directory"),
            }
            output::detail(&format!("local:  {}", local_config_path(dir).display()));
            Ok(())
        }
        ConfigCommands::Template => {
            output::data(&Settings::template());
            Ok(())
        }
    }
}
