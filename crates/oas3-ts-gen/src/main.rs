use clap::Parser;
use oas3_ts_gen::ui::{self, Cli, Colors, Commands, ListCommands, colors};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Operations { input } => ui::commands::list_operations(&input, &colors).await?,
    },
    Commands::Convert(command) => {
      let config = ui::commands::ConvertConfig::from_command(command);
      ui::commands::convert(&config, &colors).await?;
    }
  }

  Ok(())
}
