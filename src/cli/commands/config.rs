use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        edit_config,
        editor,
    } = &cli.command
    {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
        }

        if *print_config {
            info("Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !file.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist yet; run `dotlog init` first",
                    file.display()
                )));
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&file).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited using '{}'", editor_to_use));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&file).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration edited using fallback '{}'",
                                default_editor
                            ));
                        }
                        _ => error(format!(
                            "Failed to edit configuration using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }

            // Surface mistakes right away instead of on the next command.
            Config::from_path(&file)?;
        }
    }

    Ok(())
}
