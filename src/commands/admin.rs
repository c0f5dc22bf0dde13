use crate::*;

pub fn handle_config_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            let config = resolve_config(&cli.root, cli.config.as_deref(), &Overrides::default())?;
            print_one(cli.json, config, |c| {
                let mut lines = vec![
                    format!("root\t{}", c.root.display()),
                    format!("metrics\t{}", c.metrics_path.display()),
                ];
                for name in CheckName::ALL {
                    lines.push(format!(
                        "{}\t{}",
                        name.as_str(),
                        c.artifacts.get(name).display()
                    ));
                }
                lines.push(format!("output\t{}", c.output_path.display()));
                lines.push(format!("threshold\t{}", c.accuracy_threshold));
                lines.push(format!("lang\t{}", labels(c.lang).lang_code));
                lines.push(format!("format\t{:?}", c.format).to_lowercase());
                lines.join("\n")
            })?;
        }
    }

    Ok(true)
}
