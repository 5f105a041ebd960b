use clap::Parser;
use command_center::cli::{
    components, handle_completions, handle_config_init, inspect, status, Cli, Commands,
    ConfigCommands,
};

fn print_output(
    result: Result<String, Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    result.map(|output| println!("{}", output))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => command_center::cli::serve::run_serve(args).await,
        Commands::Status(args) => print_output(status::handle_status(&args)),
        Commands::Components(args) => print_output(components::handle_components(&args)),
        Commands::Inspect(args) => {
            // {:#} keeps the anyhow context chain on one line
            print_output(
                inspect::handle_inspect(&args)
                    .await
                    .map_err(|e| format!("{:#}", e).into()),
            )
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
