use anyhow::Error;

use crate::args::DecomposeSubCommand;
use crate::prompts::{micro_steps_messages, MICRO_STEPS_RESPONSE_FORMAT};

pub async fn run(cmd: &DecomposeSubCommand) -> Result<(), Error> {
    let steps = super::request_steps(
        micro_steps_messages(&cmd.goal),
        MICRO_STEPS_RESPONSE_FORMAT.clone(),
        &cmd.completion,
    )
    .await?;
    super::print_steps(&steps, cmd.completion.json)
}
