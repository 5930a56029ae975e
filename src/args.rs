use clap::{Args as ClapArgs, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
Tinystep breaks the goals you keep putting off into steps so small they feel effortless.

It sends your goal to the DeepSeek chat API with a behavior-design prompt built on BJ Fogg's behavior model (B=MAP), gets back 3-5 'micro-steps', and prints them as a checklist:
- Decompose: a goal becomes 3-5 micro-steps, each doable in under 2 minutes.
- Simplify: a step that still feels too hard becomes 3 even smaller nano-steps.
- Config: store your API key, model and endpoint in tinystep.toml.
"###
)]
pub struct Args {
    #[command(subcommand)]
    pub subcmd: Option<SubCommands>,
}

#[derive(Parser, Debug)]
pub enum SubCommands {
    /// Break a goal into 3-5 micro-steps
    Decompose(DecomposeSubCommand),
    /// Break a step that is still too hard into 3 nano-steps
    Simplify(SimplifySubCommand),
    /// Set or get default configuration values in your tinystep.toml
    Config(ConfigSubCommand),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Break a goal into micro-steps", long_about = None)]
pub struct DecomposeSubCommand {
    /// The goal to decompose
    pub goal: String,

    #[command(flatten)]
    pub completion: CompletionArgs,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Break a difficult step into nano-steps", long_about = None)]
pub struct SimplifySubCommand {
    /// The step that is still too difficult
    pub step: String,

    #[command(flatten)]
    pub completion: CompletionArgs,
}

#[derive(ClapArgs, Debug)]
pub struct CompletionArgs {
    /// Model to use instead of the configured default
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff
    #[arg(long)]
    pub top_p: Option<f32>,

    /// Maximum number of output tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Print the raw step list as JSON instead of a checklist
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Set or get configuration values", long_about = None)]
pub struct ConfigSubCommand {
    /// Set a configuration value. Use the format key=value.
    /// `tinystep config --set model=deepseek-reasoner`
    #[arg(short, long)]
    pub set: Option<String>,

    /// Get your current configuration value.
    /// `tinystep config --get model`
    #[arg(short, long)]
    pub get: Option<String>,
}
