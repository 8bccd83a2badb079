use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::ui::{header, hint, print, UiContext};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "daybook", &mut std::io::stdout());
    Ok(())
}

/// Printed when `daybook` runs without a subcommand.
pub fn print_quickstart(ctx: &UiContext) {
    print(ctx, &header(ctx, "quickstart", None));
    println!("  daybook init                 Create an encrypted journal");
    println!("  daybook write                Write today's entry");
    println!("  daybook show yesterday       Read an entry");
    println!("  daybook list                 List entry dates");
    println!("  daybook prev / next          Step between entries");
    print(ctx, &hint(ctx, "daybook --help for every command"));
}
